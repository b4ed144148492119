use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the coordination service is reachable. Absent when no
    /// coordination service is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordination_healthy: Option<bool>,
}

/// GET /health -- returns service, database, and coordination health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = calo_db::health_check(&state.pool).await.is_ok();

    let coordination_healthy = match &state.coordination {
        Some(client) => Some(client.ping().await.is_ok()),
        None => None,
    };

    let status = if db_healthy && coordination_healthy.unwrap_or(true) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        coordination_healthy,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
