//! Handlers for the `/workflows/{id}/action[s]` resource.

use axum::extract::{Path, State};
use axum::Json;
use calo_core::types::DbId;
use calo_db::models::workflow_action::ActionDetails;
use calo_db::repositories::WorkflowActionRepo;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /workflows/{id}/action
pub async fn add(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
    Json(details): Json<ActionDetails>,
) -> AppResult<Json<Value>> {
    WorkflowActionRepo::add(&state.pool, workflow_id, &details)
        .await
        .map_err(|err| {
            AppError::from_store(
                err,
                AppError::BadRequest("Failed to add action to the workflow".into()),
            )
        })?;

    Ok(Json(json!({
        "message": "Action added to the workflow successfully"
    })))
}

/// DELETE /workflows/{id}/action/{action_id}
pub async fn remove(
    State(state): State<AppState>,
    Path((workflow_id, action_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Value>> {
    WorkflowActionRepo::remove(&state.pool, workflow_id, action_id)
        .await
        .map_err(|err| {
            AppError::from_store(
                err,
                AppError::BadRequest("Failed to delete action from the workflow".into()),
            )
        })?;

    Ok(Json(json!({
        "message": "Action deleted from the workflow successfully"
    })))
}

/// GET /workflows/{id}/actions
pub async fn list(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let workflow_actions = WorkflowActionRepo::list(&state.pool, workflow_id)
        .await
        .map_err(|_| AppError::Internal("Failed to retrieve workflow actions".into()))?;

    if workflow_actions.is_empty() && state.config.empty_collections_as_not_found {
        return Err(AppError::NotFound(
            "No workflow actions found for the specified workflow".into(),
        ));
    }

    Ok(Json(json!({ "workflowActions": workflow_actions })))
}
