//! Mock data the catalog starts from on every process start.

use crate::models::employee::Employee;
use crate::models::exam::{Exam, ExamTestCategory};
use crate::models::test::{Difficulty, TestAnalytics, TestCategory, TestRecord, TestStatus};
use crate::utils::time::date_utc;

pub fn mock_employees() -> Vec<Employee> {
    vec![
        Employee::new("emp1", "John Smith", "Content Creator"),
        Employee::new("emp2", "Sarah Johnson", "Test Designer"),
        Employee::new("emp3", "Michael Brown", "Subject Matter Expert"),
        Employee::new("emp4", "Emily Davis", "Content Reviewer"),
        Employee::new("emp5", "David Wilson", "Quiz Creator"),
    ]
}

pub fn mock_tests() -> Vec<TestRecord> {
    vec![
        TestRecord {
            id: "test1".into(),
            title: "Banking Awareness Quiz - April 2024".into(),
            description: "Comprehensive quiz covering recent banking policies and financial news"
                .into(),
            category: TestCategory::Prelims,
            subject: "Banking Awareness".into(),
            difficulty: Difficulty::Medium,
            question_count: 50,
            duration_minutes: 60,
            created_by: "emp1".into(),
            created_at: date_utc(2024, 4, 15),
            status: TestStatus::Published,
            analytics: Some(TestAnalytics {
                attempts: 245,
                avg_score_percent: 72,
            }),
        },
        TestRecord {
            id: "test2".into(),
            title: "Quantitative Aptitude - Advanced".into(),
            description: "Advanced level quantitative aptitude test focusing on data interpretation and arithmetic".into(),
            category: TestCategory::Mains,
            subject: "Quantitative Aptitude".into(),
            difficulty: Difficulty::Hard,
            question_count: 35,
            duration_minutes: 45,
            created_by: "emp2".into(),
            created_at: date_utc(2024, 4, 20),
            status: TestStatus::PendingApproval,
            analytics: None,
        },
        TestRecord {
            id: "test3".into(),
            title: "English Grammar Speed Drill".into(),
            description: "Quick practice drill focusing on common grammar errors and vocabulary"
                .into(),
            category: TestCategory::SpeedDrill,
            subject: "English".into(),
            difficulty: Difficulty::Easy,
            question_count: 25,
            duration_minutes: 15,
            created_by: "emp4".into(),
            created_at: date_utc(2024, 4, 25),
            status: TestStatus::Draft,
            analytics: None,
        },
        TestRecord {
            id: "test4".into(),
            title: "Reasoning Ability - Logical Puzzles".into(),
            description: "Test focusing on logical puzzles, seating arrangements, and blood relations"
                .into(),
            category: TestCategory::Mains,
            subject: "Reasoning".into(),
            difficulty: Difficulty::Medium,
            question_count: 30,
            duration_minutes: 40,
            created_by: "emp3".into(),
            created_at: date_utc(2024, 4, 18),
            status: TestStatus::Published,
            analytics: Some(TestAnalytics {
                attempts: 189,
                avg_score_percent: 68,
            }),
        },
        TestRecord {
            id: "test5".into(),
            title: "Current Affairs - March 2024".into(),
            description: "Comprehensive test covering national and international current affairs for March 2024".into(),
            category: TestCategory::Prelims,
            subject: "Current Affairs".into(),
            difficulty: Difficulty::Medium,
            question_count: 50,
            duration_minutes: 30,
            created_by: "emp5".into(),
            created_at: date_utc(2024, 4, 10),
            status: TestStatus::Unpublished,
            analytics: None,
        },
    ]
}

/// Exam whose cards every other exam page borrows.
pub const DEFAULT_EXAM_ID: &str = "ibps-po";

pub fn mock_exams() -> Vec<Exam> {
    [
        ("ibps-po", "IBPS PO"),
        ("sbi-po", "SBI PO"),
        ("ibps-clerk", "IBPS Clerk"),
        ("ssc-cgl", "SSC CGL"),
    ]
    .into_iter()
    .map(|(id, name)| Exam {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Test-series cards keyed by exam id.
pub fn mock_exam_categories() -> Vec<(String, Vec<ExamTestCategory>)> {
    let cards = [
        ("full", "Full Length Tests", "Complete mock tests with all sections", 15),
        ("sectional", "Sectional Tests", "Practice specific sections", 30),
        ("speed", "Speed Tests", "Quick practice for rapid improvement", 25),
        ("previous", "Previous Year Papers", "Solve past year questions", 10),
    ]
    .into_iter()
    .map(|(id, title, description, test_count)| ExamTestCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        test_count,
        route: id.to_string(),
    })
    .collect();

    vec![(DEFAULT_EXAM_ID.to_string(), cards)]
}
