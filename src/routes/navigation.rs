use axum::{extract::Query, response::IntoResponse, Json};

use crate::{
    dto::catalog_dto::{NavigationQuery, NavigationResponse},
    error::{Error, Result},
    models::navigation::Role,
    services::navigation_service::{active_item, footer_items, nav_items},
};

#[utoipa::path(
    get,
    path = "/api/navigation",
    params(
        ("role" = Option<String>, Query, description = "student, admin, employee or owner"),
        ("path" = Option<String>, Query, description = "Current path, used to mark the active item")
    ),
    responses(
        (status = 200, description = "Sidebar for the role", body = Json<NavigationResponse>),
        (status = 400, description = "Unknown role")
    )
)]
#[axum::debug_handler]
pub async fn get_navigation(Query(query): Query<NavigationQuery>) -> Result<impl IntoResponse> {
    let role: Role = match query.role.as_deref().map(str::trim) {
        None | Some("") => Role::default(),
        Some(code) => code.parse::<Role>().map_err(Error::BadRequest)?,
    };
    let active_href = query
        .path
        .as_deref()
        .and_then(|path| active_item(role, path))
        .map(|item| item.href);

    Ok(Json(NavigationResponse {
        role,
        items: nav_items(role),
        footer: footer_items(),
        active_href,
    }))
}
