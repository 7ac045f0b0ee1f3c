use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Restricts browsers to `allowed_origin` when one is configured and a valid
/// header value; otherwise any origin may call the API.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(origin) => layer.allow_origin(origin),
        None => {
            if let Some(raw) = allowed_origin {
                tracing::warn!("Ignoring invalid CORS origin {:?}; allowing any origin", raw);
            }
            layer.allow_origin(Any)
        }
    }
}
