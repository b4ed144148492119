//! Route definitions.

pub mod health;
pub mod workflow;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// One entry in the route index served at `/`.
#[derive(Serialize)]
struct RouteInfo {
    path: &'static str,
    methods: &'static [&'static str],
}

/// GET / -- enumerate the mounted routes.
async fn index() -> Json<Vec<RouteInfo>> {
    Json(vec![
        RouteInfo { path: "/", methods: &["get"] },
        RouteInfo { path: "/health", methods: &["get"] },
        RouteInfo { path: "/workflows", methods: &["get", "post"] },
        RouteInfo { path: "/workflows/validate", methods: &["post"] },
        RouteInfo { path: "/workflows/{workflowId}", methods: &["get", "put", "delete"] },
        RouteInfo { path: "/workflows/{workflowId}/execute", methods: &["post"] },
        RouteInfo { path: "/workflows/{workflowId}/external-services", methods: &["get", "post"] },
        RouteInfo {
            path: "/workflows/{workflowId}/external-services/{externalServiceId}",
            methods: &["delete"],
        },
        RouteInfo { path: "/workflows/{workflowId}/action", methods: &["post"] },
        RouteInfo { path: "/workflows/{workflowId}/action/{actionId}", methods: &["delete"] },
        RouteInfo { path: "/workflows/{workflowId}/actions", methods: &["get"] },
    ])
}

/// Build the full route tree (everything except middleware).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(health::router())
        .nest("/workflows", workflow::router())
}
