use std::collections::HashMap;

use crate::database::seed::{mock_exam_categories, mock_exams, DEFAULT_EXAM_ID};
use crate::models::exam::{Exam, ExamTestCategory};

/// Exam test-series pages. Lookups never fail: unknown exams borrow the
/// default exam's cards and show their id upper-cased as the name.
#[derive(Debug, Clone)]
pub struct ExamService {
    exams: Vec<Exam>,
    categories: HashMap<String, Vec<ExamTestCategory>>,
}

impl ExamService {
    pub fn new() -> Self {
        Self {
            exams: mock_exams(),
            categories: mock_exam_categories().into_iter().collect(),
        }
    }

    pub fn list_exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn exam_name(&self, exam_id: &str) -> String {
        self.exams
            .iter()
            .find(|e| e.id == exam_id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| exam_id.to_uppercase())
    }

    pub fn categories_for(&self, exam_id: &str) -> &[ExamTestCategory] {
        self.categories
            .get(exam_id)
            .or_else(|| self.categories.get(DEFAULT_EXAM_ID))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn category_href(exam_id: &str, category: &ExamTestCategory) -> String {
        format!("/tests/{}/{}", exam_id, category.route)
    }
}

impl Default for ExamService {
    fn default() -> Self {
        Self::new()
    }
}
