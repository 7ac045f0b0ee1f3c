use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

fn setup_app() -> Router {
    Router::new()
        .route("/health", get(moct_backend::routes::health::health))
        .merge(moct_backend::routes::public_routes(100))
        .with_state(moct_backend::AppState::new())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null))
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let app = setup_app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tests"], 5);
}

#[tokio::test]
async fn exam_pages_fall_back_gracefully() {
    let app = setup_app();

    let (status, body) = get_json(&app, "/api/exams").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["IBPS PO", "SBI PO", "IBPS Clerk", "SSC CGL"]);
    assert_eq!(body[0]["href"], "/tests/ibps-po");

    let (_, page) = get_json(&app, "/api/exams/ibps-clerk").await;
    assert_eq!(page["exam_name"], "IBPS Clerk");
    assert_eq!(page["categories"].as_array().unwrap().len(), 4);
    assert_eq!(page["categories"][0]["title"], "Full Length Tests");
    assert_eq!(page["categories"][0]["href"], "/tests/ibps-clerk/full");
    assert_eq!(page["categories"][3]["test_count"], 10);

    let (status, page) = get_json(&app, "/api/exams/rrb-po").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["exam_id"], "rrb-po");
    assert_eq!(page["exam_name"], "RRB-PO");
    assert_eq!(page["categories"][2]["href"], "/tests/rrb-po/speed");
}

#[tokio::test]
async fn navigation_is_keyed_by_role() {
    let app = setup_app();

    let (_, body) = get_json(&app, "/api/navigation").await;
    assert_eq!(body["role"], "student");
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["footer"][1]["title"], "Logout");
    assert!(body["active_href"].is_null());

    let (_, body) = get_json(&app, "/api/navigation?role=owner&path=/dashboard/owner/revenue").await;
    assert_eq!(body["role"], "owner");
    assert_eq!(body["items"][1]["title"], "Revenue");
    assert_eq!(body["active_href"], "/dashboard/owner/revenue");

    let (status, body) = get_json(&app, "/api/navigation?role=guest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("guest"));
}
