use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::models::test::{
    Difficulty, NewTest, TestCategory, TestRecord, TestStatus, TestView,
};
use crate::services::test_service::TestFilter;

/// Body of the "Add test" dialog. Missing fields take the dialog's initial
/// values; numbers are never rejected, anything unusable becomes 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTestPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: TestCategory,
    #[serde(default)]
    pub subject: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default = "default_question_count", deserialize_with = "lenient_count")]
    pub question_count: u32,
    #[serde(default = "default_duration_minutes", deserialize_with = "lenient_count")]
    pub duration_minutes: u32,
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

fn default_category() -> TestCategory {
    TestCategory::Prelims
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_question_count() -> u32 {
    50
}

fn default_duration_minutes() -> u32 {
    60
}

fn default_created_by() -> String {
    "emp1".to_string()
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

/// Whole, non-negative numbers pass through (fractions truncate). Strings
/// are read like a form field: the leading integer counts and any trailing
/// text is ignored, so `"45 min"` is 45. Everything else is 0.
pub fn coerce_count(value: &JsonValue) -> u32 {
    match value {
        JsonValue::Number(n) => match n.as_u64().map(|v| v as f64).or_else(|| n.as_f64()) {
            Some(n) if n.is_finite() && n > 0.0 => n.min(u32::MAX as f64) as u32,
            _ => 0,
        },
        JsonValue::String(s) => leading_count(s),
        _ => 0,
    }
}

// Optional sign, then the digit run. Negative or digit-less input is 0.
fn leading_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits
        .parse::<u64>()
        .map_or(u32::MAX, |n| n.min(u32::MAX as u64) as u32)
}

impl From<CreateTestPayload> for NewTest {
    fn from(value: CreateTestPayload) -> Self {
        Self {
            title: value.title,
            description: value.description,
            category: value.category,
            subject: value.subject,
            difficulty: value.difficulty,
            question_count: value.question_count,
            duration_minutes: value.duration_minutes,
            created_by: value.created_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTestStatusPayload {
    pub status: String,
}

impl UpdateTestStatusPayload {
    pub fn parse_status(&self) -> Result<TestStatus> {
        self.status.trim().parse::<TestStatus>().map_err(Error::BadRequest)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub view: Option<String>,
}

impl TestListQuery {
    pub fn to_filter(&self) -> Result<TestFilter> {
        Ok(TestFilter {
            search: self.search.clone().unwrap_or_default(),
            status: parse_facet(self.status.as_deref())?,
            category: parse_facet(self.category.as_deref())?,
            difficulty: parse_facet(self.difficulty.as_deref())?,
        })
    }

    pub fn to_view(&self) -> Result<TestView> {
        match self.view.as_deref().map(str::trim) {
            None | Some("") => Ok(TestView::All),
            Some(code) => TestView::from_code(code)
                .ok_or_else(|| Error::BadRequest(format!("Unknown view: {}", code))),
        }
    }
}

// Absent, empty and "all" all mean no constraint.
fn parse_facet<T>(raw: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(Error::BadRequest),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TestCategory,
    pub category_label: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub difficulty_label: String,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub created_by: String,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    pub status: TestStatus,
    pub status_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_score_percent: Option<u32>,
}

impl TestResponse {
    pub fn from_record(value: TestRecord, creator_name: String) -> Self {
        Self {
            category_label: value.category.display_name().to_string(),
            difficulty_label: value.difficulty.display_name().to_string(),
            status_label: value.status.display_name().to_string(),
            attempts: value.analytics.map(|a| a.attempts),
            avg_score_percent: value.analytics.map(|a| a.avg_score_percent),
            id: value.id,
            title: value.title,
            description: value.description,
            category: value.category,
            subject: value.subject,
            difficulty: value.difficulty,
            question_count: value.question_count,
            duration_minutes: value.duration_minutes,
            created_by: value.created_by,
            creator_name,
            created_at: value.created_at,
            status: value.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestListResponse {
    pub items: Vec<TestResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestStatsResponse {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
}

impl From<BTreeMap<TestStatus, usize>> for TestStatsResponse {
    fn from(value: BTreeMap<TestStatus, usize>) -> Self {
        Self {
            total: value.values().sum(),
            by_status: value
                .into_iter()
                .map(|(status, n)| (status.code().to_string(), n))
                .collect(),
        }
    }
}
