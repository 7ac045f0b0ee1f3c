use serde::{Deserialize, Serialize};

use crate::models::exam::{Exam, ExamTestCategory};
use crate::models::navigation::{NavItem, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeNameResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSummary {
    pub id: String,
    pub name: String,
    pub href: String,
}

impl From<Exam> for ExamSummary {
    fn from(value: Exam) -> Self {
        Self {
            href: format!("/tests/{}", value.id),
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamCategoryCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub test_count: u32,
    pub href: String,
}

impl ExamCategoryCard {
    pub fn new(category: &ExamTestCategory, href: String) -> Self {
        Self {
            id: category.id.clone(),
            title: category.title.clone(),
            description: category.description.clone(),
            test_count: category.test_count,
            href,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamPageResponse {
    pub exam_id: String,
    pub exam_name: String,
    pub categories: Vec<ExamCategoryCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavigationQuery {
    pub role: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub role: Role,
    pub items: Vec<NavItem>,
    pub footer: Vec<NavItem>,
    pub active_href: Option<String>,
}
