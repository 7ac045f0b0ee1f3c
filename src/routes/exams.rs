use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::catalog_dto::{ExamCategoryCard, ExamPageResponse, ExamSummary},
    services::exam_service::ExamService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/exams",
    responses(
        (status = 200, description = "Exams with a test series", body = Json<Vec<ExamSummary>>)
    )
)]
#[axum::debug_handler]
pub async fn list_exams(State(state): State<AppState>) -> impl IntoResponse {
    let exams: Vec<ExamSummary> = state
        .exam_service
        .list_exams()
        .iter()
        .cloned()
        .map(Into::into)
        .collect();
    Json(exams)
}

#[utoipa::path(
    get,
    path = "/api/exams/{exam}",
    params(
        ("exam" = String, Path, description = "Exam ID, e.g. ibps-po")
    ),
    responses(
        (status = 200, description = "Test-series page", body = Json<ExamPageResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_exam_page(
    State(state): State<AppState>,
    Path(exam): Path<String>,
) -> impl IntoResponse {
    let categories = state
        .exam_service
        .categories_for(&exam)
        .iter()
        .map(|c| ExamCategoryCard::new(c, ExamService::category_href(&exam, c)))
        .collect();

    Json(ExamPageResponse {
        exam_name: state.exam_service.exam_name(&exam),
        exam_id: exam,
        categories,
    })
}
