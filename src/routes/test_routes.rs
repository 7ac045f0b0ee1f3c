use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::test_dto::{
        CreateTestPayload, TestListQuery, TestListResponse, TestResponse, TestStatsResponse,
        UpdateTestStatusPayload,
    },
    error::Result,
    models::test::{TestAction, TestRecord},
    services::test_service::TestService,
    AppState,
};

fn to_response(service: &TestService, test: TestRecord) -> Result<TestResponse> {
    let creator_name = service.lookup_employee_name(&test.created_by)?;
    Ok(TestResponse::from_record(test, creator_name))
}

#[utoipa::path(
    get,
    path = "/api/admin/tests",
    params(
        ("search" = Option<String>, Query, description = "Matches title, description or subject"),
        ("status" = Option<String>, Query, description = "Status code or all"),
        ("category" = Option<String>, Query, description = "Category code or all"),
        ("difficulty" = Option<String>, Query, description = "Difficulty code or all"),
        ("view" = Option<String>, Query, description = "all, pending-approval, published or analytics")
    ),
    responses(
        (status = 200, description = "Filtered tests", body = Json<TestListResponse>),
        (status = 400, description = "Unknown filter value")
    )
)]
#[axum::debug_handler]
pub async fn list_tests(
    State(state): State<AppState>,
    Query(query): Query<TestListQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.to_filter()?;
    let view = query.to_view()?;
    let tests = state.test_service.view_tests(&filter, view)?;
    let items = tests
        .into_iter()
        .map(|t| to_response(&state.test_service, t))
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(TestListResponse {
        total: items.len(),
        items,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/tests",
    request_body = CreateTestPayload,
    responses(
        (status = 201, description = "Draft test created", body = Json<TestResponse>),
        (status = 400, description = "Malformed body or unknown category/difficulty")
    )
)]
#[axum::debug_handler]
pub async fn create_test(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTestPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let test = state.test_service.create_test(payload.into())?;
    let body = to_response(&state.test_service, test)?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/admin/tests/{id}",
    params(
        ("id" = String, Path, description = "Test ID")
    ),
    responses(
        (status = 200, description = "Test found", body = Json<TestResponse>),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn get_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let test = state.test_service.get_test(&id)?;
    Ok(Json(to_response(&state.test_service, test)?))
}

#[utoipa::path(
    post,
    path = "/api/admin/tests/{id}/status",
    params(
        ("id" = String, Path, description = "Test ID")
    ),
    request_body = UpdateTestStatusPayload,
    responses(
        (status = 200, description = "Status replaced", body = Json<TestResponse>),
        (status = 400, description = "Malformed body or unknown status"),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn update_test_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateTestStatusPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let status = payload.parse_status()?;
    let test = state.test_service.set_status(&id, status)?;
    Ok(Json(to_response(&state.test_service, test)?))
}

async fn review(state: AppState, id: String, action: TestAction) -> Result<Json<TestResponse>> {
    let test = state.test_service.apply_action(&id, action)?;
    Ok(Json(to_response(&state.test_service, test)?))
}

#[utoipa::path(
    post,
    path = "/api/admin/tests/{id}/approve",
    params(("id" = String, Path, description = "Test ID")),
    responses(
        (status = 200, description = "Test published", body = Json<TestResponse>),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn approve_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    review(state, id, TestAction::Approve).await
}

#[utoipa::path(
    post,
    path = "/api/admin/tests/{id}/reject",
    params(("id" = String, Path, description = "Test ID")),
    responses(
        (status = 200, description = "Test returned to draft", body = Json<TestResponse>),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn reject_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    review(state, id, TestAction::Reject).await
}

#[utoipa::path(
    post,
    path = "/api/admin/tests/{id}/unpublish",
    params(("id" = String, Path, description = "Test ID")),
    responses(
        (status = 200, description = "Test unpublished", body = Json<TestResponse>),
        (status = 404, description = "Test not found")
    )
)]
#[axum::debug_handler]
pub async fn unpublish_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    review(state, id, TestAction::Unpublish).await
}

#[utoipa::path(
    get,
    path = "/api/admin/tests/stats",
    responses(
        (status = 200, description = "Test totals per status", body = Json<TestStatsResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_test_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let counts = state.test_service.status_counts()?;
    Ok(Json(TestStatsResponse::from(counts)))
}
