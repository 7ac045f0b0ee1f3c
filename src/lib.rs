pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    exam_service::ExamService,
    test_service::{TestCatalog, TestService},
};

#[derive(Clone)]
pub struct AppState {
    pub test_service: TestService,
    pub exam_service: ExamService,
}

impl AppState {
    /// State seeded with the mock catalog. Nothing outlives the process.
    pub fn new() -> Self {
        Self::with_catalog(TestCatalog::seeded())
    }

    pub fn with_catalog(catalog: TestCatalog) -> Self {
        Self {
            test_service: TestService::new(catalog),
            exam_service: ExamService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
