use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "kanban-service";

/// Liveness: reports whether the database answers a ping.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": SERVICE_NAME
                })),
            )
        }
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        crate::services::get_metrics(),
    )
}

#[cfg(test)]
mod tests {
    use crate::services::store::testing::{InMemoryStore, UnreachableStore};
    use crate::services::ColumnStore;
    use crate::startup::{build_router, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get(store: Arc<dyn ColumnStore>, uri: &str) -> (StatusCode, Vec<u8>) {
        let router = build_router(AppState {
            store,
        });
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health_reports_ok_when_store_answers() {
        let (status, body) = get(Arc::new(InMemoryStore::new(vec![])), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "kanban-service");
    }

    #[tokio::test]
    async fn health_reports_unhealthy_when_store_is_down() {
        let (status, body) = get(Arc::new(UnreachableStore), "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "unhealthy");
        assert!(value.get("error").is_none());
        assert!(!String::from_utf8_lossy(&body).contains("Server selection"));
    }

    #[tokio::test]
    async fn readiness_follows_store() {
        let (status, _) = get(Arc::new(InMemoryStore::new(vec![])), "/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(Arc::new(UnreachableStore), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
