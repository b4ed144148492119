use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calo_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// The first four variants carry the user-visible strings the API has always
/// answered with; the remaining ones let handlers attach the per-endpoint
/// message the contract demands. Implements [`IntoResponse`] to produce
/// consistent `{"error": ...}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Workflow not found")]
    WorkflowNotFound,

    #[error("External service not found")]
    ExternalServiceNotFound,

    #[error("Action not found in the specified workflow")]
    ActionNotFound,

    #[error("Invalid action type provided")]
    InvalidActionType,

    /// A bad request (missing required fields, rejected store call) with a
    /// human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// A not-found condition with an endpoint-specific message.
    #[error("{0}")]
    NotFound(String),

    /// An internal failure. The message is a generic endpoint-specific
    /// string; the original store error was already logged at the boundary.
    #[error("{0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a typed store-error kind to its HTTP-level counterpart.
    ///
    /// Kinds without a dedicated mapping (generic database failures, a
    /// missing identifier from `create_workflow`) collapse into `fallback`,
    /// which carries the endpoint's own message and status.
    pub fn from_store(err: StoreError, fallback: AppError) -> Self {
        match err {
            StoreError::WorkflowNotFound => AppError::WorkflowNotFound,
            StoreError::ExternalServiceNotFound => AppError::ExternalServiceNotFound,
            StoreError::ActionNotFound => AppError::ActionNotFound,
            StoreError::InvalidActionType => AppError::InvalidActionType,
            StoreError::MissingWorkflowId | StoreError::Database(_) => fallback,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::WorkflowNotFound
            | AppError::ExternalServiceNotFound
            | AppError::ActionNotFound
            | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidActionType | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
