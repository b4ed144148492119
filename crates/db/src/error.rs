//! Typed error kinds for the stored-procedure boundary.
//!
//! The external procedures signal domain failures by raising exceptions with
//! fixed message text. That text is classified into a [`StoreError`] kind
//! exactly once, here, so callers switch on kinds instead of matching
//! strings themselves.

/// Error returned by every repository method.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The referenced workflow does not exist.
    #[error("Workflow not found")]
    WorkflowNotFound,

    /// The referenced external service does not exist.
    #[error("External service not found")]
    ExternalServiceNotFound,

    /// The referenced action does not exist within the workflow.
    #[error("Action not found in the specified workflow")]
    ActionNotFound,

    /// The supplied action type is not registered in the store.
    #[error("Invalid action type provided")]
    InvalidActionType,

    /// `create_workflow` completed without returning an identifier.
    #[error("Workflow ID not returned from the database")]
    MissingWorkflowId,

    /// Any other failure from the store (connectivity, unexpected
    /// procedure-level error).
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    /// Classify a raised procedure exception into a typed kind.
    ///
    /// The literal substrings below are the external store's de facto error
    /// API (see the procedure bodies in `migrations/`); they must not be
    /// inspected anywhere else.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message();
            if message.contains("Workflow not found") {
                return StoreError::WorkflowNotFound;
            }
            if message.contains("Invalid action type") {
                return StoreError::InvalidActionType;
            }
            if message.contains("External service not found") {
                return StoreError::ExternalServiceNotFound;
            }
            if message.contains("Action not found") {
                return StoreError::ActionNotFound;
            }
        }
        tracing::error!(error = %err, "Store call failed");
        StoreError::Database(err)
    }
}
