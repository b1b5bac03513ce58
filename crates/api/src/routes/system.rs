//! Health and Prometheus metrics endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog::ProductCatalog;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub catalog: &'static str,
    pub sessions: usize,
}

/// GET /health — reports liveness plus catalog reachability.
///
/// The endpoint answers 200 even with the catalog down; carts keep working
/// for products already added.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let catalog = match state.catalog.categories().await {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };

    Json(HealthResponse {
        status: if catalog == "ok" { "ok" } else { "degraded" },
        catalog,
        sessions: state.sessions.len().await,
    })
}

/// GET /metrics — returns Prometheus-formatted metrics.
pub async fn metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}
