//! Prometheus export for the request metrics recorded by
//! `service_core::middleware::metrics`.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global recorder. Call once at startup before any metric is
/// recorded; a second call fails.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Prometheus recorder: {}", e)))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("metrics already initialized")))
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::testing::InMemoryStore;
    use crate::startup::{build_router, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn send(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    // The only test in this binary that installs the global recorder.
    #[tokio::test]
    async fn requests_are_recorded_per_route() {
        init_metrics().unwrap();
        let router = build_router(AppState {
            store: Arc::new(InMemoryStore::new(vec![])),
        });

        assert_eq!(send(router.clone(), "/tasks").await, StatusCode::OK);
        assert_eq!(
            send(router.clone(), "/x/3f2a9c1e-0d4b-4c8a-9e1f-2b3c4d5e6f70").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            send(router, "/x/8a7b6c5d-4e3f-4a1b-9c0d-1e2f3a4b5c6d").await,
            StatusCode::NOT_FOUND
        );

        let rendered = get_metrics();
        assert!(rendered.contains("http_requests_total"), "{}", rendered);
        assert!(rendered.contains("path=\"/tasks\""), "{}", rendered);
        assert!(!rendered.contains("/x/"), "{}", rendered);

        let unmatched_series: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with("http_requests_total{"))
            .filter(|line| line.contains("path=\"unmatched\""))
            .collect();
        assert_eq!(unmatched_series.len(), 1, "{}", rendered);
        assert!(unmatched_series[0].ends_with(" 2"), "{}", rendered);
    }
}
