use std::sync::Arc;

use crate::config::ServerConfig;
use crate::coordination::CoordinationClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: calo_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Key-value coordination service client. Connected at startup when
    /// `COORDINATION_URL` is set; only the health check talks to it.
    pub coordination: Option<CoordinationClient>,
}
