use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{dto::catalog_dto::EmployeeNameResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/admin/employees",
    responses(
        (status = 200, description = "Employee directory")
    )
)]
#[axum::debug_handler]
pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let employees = state.test_service.list_employees()?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/api/admin/employees/{id}/name",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Display name, Unknown when not in the directory", body = Json<EmployeeNameResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_employee_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let name = state.test_service.lookup_employee_name(&id)?;
    Ok(Json(EmployeeNameResponse { id, name }))
}
