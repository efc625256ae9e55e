use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// CORS policy that admits every origin and request header.
///
/// Browsers get `access-control-allow-origin: *`, so credentials are never
/// attached to cross-origin calls.
pub fn open_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
