use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a test. Any status may follow any other; the store
/// does not enforce a review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    Draft,
    PendingApproval,
    Published,
    Unpublished,
}

impl TestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TestStatus::Draft => "draft",
            TestStatus::PendingApproval => "pending-approval",
            TestStatus::Published => "published",
            TestStatus::Unpublished => "unpublished",
        }
    }

    /// Label shown on the status badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            TestStatus::Draft => "Draft",
            TestStatus::PendingApproval => "Pending Approval",
            TestStatus::Published => "Published",
            TestStatus::Unpublished => "Unpublished",
        }
    }

    pub fn all() -> Vec<TestStatus> {
        vec![
            TestStatus::Draft,
            TestStatus::PendingApproval,
            TestStatus::Published,
            TestStatus::Unpublished,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(TestStatus::Draft),
            "pending-approval" => Some(TestStatus::PendingApproval),
            "published" => Some(TestStatus::Published),
            "unpublished" => Some(TestStatus::Unpublished),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestCategory {
    Prelims,
    Mains,
    SpeedDrill,
}

impl TestCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TestCategory::Prelims => "prelims",
            TestCategory::Mains => "mains",
            TestCategory::SpeedDrill => "speed-drill",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TestCategory::Prelims => "Prelims",
            TestCategory::Mains => "Mains",
            TestCategory::SpeedDrill => "Speed Drill",
        }
    }

    pub fn all() -> Vec<TestCategory> {
        vec![
            TestCategory::Prelims,
            TestCategory::Mains,
            TestCategory::SpeedDrill,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "prelims" => Some(TestCategory::Prelims),
            "mains" => Some(TestCategory::Mains),
            "speed-drill" => Some(TestCategory::SpeedDrill),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

macro_rules! code_conversions {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::from_code(s).ok_or_else(|| format!("Unknown {}: {}", $what, s))
            }
        }
    };
}

code_conversions!(TestStatus, "status");
code_conversions!(TestCategory, "category");
code_conversions!(Difficulty, "difficulty");

/// Student attempt statistics. Only tests that students have taken carry
/// them, and both numbers always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnalytics {
    pub attempts: u32,
    pub avg_score_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TestCategory,
    pub subject: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub status: TestStatus,
    #[serde(flatten)]
    pub analytics: Option<TestAnalytics>,
}

impl TestRecord {
    /// Whether the analytics tab lists this test: published, with a non-zero
    /// attempt count and average score.
    pub fn has_reportable_analytics(&self) -> bool {
        self.status == TestStatus::Published
            && self
                .analytics
                .map(|a| a.attempts > 0 && a.avg_score_percent > 0)
                .unwrap_or(false)
    }
}

/// Fields supplied by the author when creating a test. Everything else is
/// assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTest {
    pub title: String,
    pub description: String,
    pub category: TestCategory,
    pub subject: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub created_by: String,
}

/// Review buttons on the admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestAction {
    Approve,
    Reject,
    Unpublish,
}

impl TestAction {
    pub fn target_status(&self) -> TestStatus {
        match self {
            TestAction::Approve => TestStatus::Published,
            TestAction::Reject => TestStatus::Draft,
            TestAction::Unpublish => TestStatus::Unpublished,
        }
    }
}

/// Tabs of the admin test screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestView {
    #[default]
    All,
    PendingApproval,
    Published,
    Analytics,
}

impl TestView {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(TestView::All),
            "pending-approval" => Some(TestView::PendingApproval),
            "published" => Some(TestView::Published),
            "analytics" => Some(TestView::Analytics),
            _ => None,
        }
    }

    pub fn includes(&self, test: &TestRecord) -> bool {
        match self {
            TestView::All => true,
            TestView::PendingApproval => test.status == TestStatus::PendingApproval,
            TestView::Published => test.status == TestStatus::Published,
            TestView::Analytics => test.has_reportable_analytics(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for status in TestStatus::all() {
            assert_eq!(status.code().parse::<TestStatus>().unwrap(), status);
        }
        for category in TestCategory::all() {
            assert_eq!(category.to_string().parse::<TestCategory>().unwrap(), category);
        }
        assert!("expert".parse::<Difficulty>().is_err());
        assert!("Published".parse::<TestStatus>().is_err());
    }

    #[test]
    fn serializes_kebab_case_codes() {
        let json = serde_json::to_string(&TestStatus::PendingApproval).unwrap();
        assert_eq!(json, "\"pending-approval\"");
        let json = serde_json::to_string(&TestCategory::SpeedDrill).unwrap();
        assert_eq!(json, "\"speed-drill\"");
    }

    #[test]
    fn analytics_fields_are_flattened_and_omitted_when_absent() {
        let mut record = TestRecord {
            id: "t".into(),
            title: "T".into(),
            description: String::new(),
            category: TestCategory::Mains,
            subject: "S".into(),
            difficulty: Difficulty::Hard,
            question_count: 1,
            duration_minutes: 1,
            created_by: "emp1".into(),
            created_at: Utc::now(),
            status: TestStatus::Draft,
            analytics: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("attempts").is_none());
        assert!(value.get("avg_score_percent").is_none());

        record.analytics = Some(TestAnalytics {
            attempts: 10,
            avg_score_percent: 55,
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["attempts"], 10);
        assert_eq!(value["avg_score_percent"], 55);
    }

    #[test]
    fn review_actions_map_to_statuses() {
        assert_eq!(TestAction::Approve.target_status(), TestStatus::Published);
        assert_eq!(TestAction::Reject.target_status(), TestStatus::Draft);
        assert_eq!(TestAction::Unpublish.target_status(), TestStatus::Unpublished);
    }
}
