use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
}

/// A card on an exam's test-series page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTestCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub test_count: u32,
    pub route: String,
}
