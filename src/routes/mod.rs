pub mod employees;
pub mod exams;
pub mod health;
pub mod navigation;
pub mod test_routes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{middleware::rate_limit, AppState};

/// Test management screen and the employee directory behind it.
pub fn admin_routes(rps: u32) -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/tests",
            get(test_routes::list_tests).post(test_routes::create_test),
        )
        .route("/api/admin/tests/stats", get(test_routes::get_test_stats))
        .route("/api/admin/tests/:id", get(test_routes::get_test))
        .route(
            "/api/admin/tests/:id/status",
            post(test_routes::update_test_status),
        )
        .route("/api/admin/tests/:id/approve", post(test_routes::approve_test))
        .route("/api/admin/tests/:id/reject", post(test_routes::reject_test))
        .route(
            "/api/admin/tests/:id/unpublish",
            post(test_routes::unpublish_test),
        )
        .route("/api/admin/employees", get(employees::list_employees))
        .route(
            "/api/admin/employees/:id/name",
            get(employees::get_employee_name),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(rps),
            rate_limit::rps_middleware,
        ))
}

/// Exam pages and navigation read by every dashboard.
pub fn public_routes(rps: u32) -> Router<AppState> {
    Router::new()
        .route("/api/exams", get(exams::list_exams))
        .route("/api/exams/:exam", get(exams::get_exam_page))
        .route("/api/navigation", get(navigation::get_navigation))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(rps),
            rate_limit::rps_middleware,
        ))
}
