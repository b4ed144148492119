//! Workflow action models and DTOs.

use calo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An ordered action within a workflow, as returned by
/// `get_workflow_actions`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WorkflowAction {
    pub id: DbId,
    pub workflow_id: DbId,
    pub ordinal: i32,
    pub action_type: String,
    pub action_data: Option<serde_json::Value>,
    pub external_service_id: Option<DbId>,
}

/// Request body for `POST /workflows/{id}/action`.
///
/// The ordinal is caller-supplied and the action type is passed through
/// unvalidated; the store enforces ordering and type checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDetails {
    pub ordinal: i32,
    pub action_type: String,
    pub action_data: Option<serde_json::Value>,
    pub external_service_id: Option<DbId>,
}
