use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

/// Liveness plus the size of the in-memory catalog, which resets on restart.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let tests = state.test_service.list_tests()?.len();
    let body = json!({
        "status": "ok",
        "tests": tests,
    });
    Ok((StatusCode::OK, Json(body)))
}
