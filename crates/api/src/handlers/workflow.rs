//! Handlers for the `/workflows` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use calo_core::types::DbId;
use calo_core::workflow as workflow_core;
use calo_db::models::workflow::{Workflow, WorkflowDefinition};
use calo_db::repositories::WorkflowRepo;
use calo_db::StoreError;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /workflows
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<WorkflowDefinition>,
) -> AppResult<(StatusCode, Json<Workflow>)> {
    let (name, description) = input
        .required_fields()
        .ok_or_else(|| AppError::BadRequest("Name and description are required fields".into()))?;

    let workflow = WorkflowRepo::create(&state.pool, name, description)
        .await
        .map_err(|err| match err {
            StoreError::MissingWorkflowId => AppError::Internal(
                "Failed to create workflow. Workflow ID not returned from the database.".into(),
            ),
            _ => AppError::Internal("Failed to create workflow. Internal server error.".into()),
        })?;

    Ok((StatusCode::CREATED, Json(workflow)))
}

/// GET /workflows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let workflows = WorkflowRepo::list(&state.pool)
        .await
        .map_err(|_| AppError::Internal("Failed to retrieve workflows".into()))?;

    if workflows.is_empty() && state.config.empty_collections_as_not_found {
        return Err(AppError::NotFound("Workflows not found".into()));
    }

    Ok(Json(json!({ "workflows": workflows })))
}

/// GET /workflows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let workflow = WorkflowRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|_| AppError::Internal("Failed to retrieve workflow".into()))?
        .ok_or(AppError::WorkflowNotFound)?;

    Ok(Json(json!({ "workflow": workflow })))
}

/// PUT /workflows/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<WorkflowDefinition>,
) -> AppResult<Json<Value>> {
    let (name, description) = input
        .required_fields()
        .ok_or_else(|| AppError::BadRequest("Name and description are required fields".into()))?;

    let workflow = WorkflowRepo::update(&state.pool, id, name, description)
        .await
        .map_err(|_| AppError::BadRequest("Failed to update workflow".into()))?
        .ok_or(AppError::WorkflowNotFound)?;

    Ok(Json(json!({ "workflow": workflow })))
}

/// DELETE /workflows/{id}
///
/// The response mirrors the store's own deletion indicator instead of
/// answering 404: a missing workflow is a `success: false` payload.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    let deleted = WorkflowRepo::delete(&state.pool, id)
        .await
        .map_err(|err| AppError::NotFound(format!("Error deleting workflow: {err}")))?;

    let workflow_info = if deleted {
        json!({ "success": true })
    } else {
        json!({ "success": false, "error": "Workflow not found" })
    };

    Ok(Json(json!({ "workflowInfo": workflow_info })))
}

/// POST /workflows/{id}/execute
///
/// Placeholder: echoes the input back as a formatted summary. No store call,
/// no state change.
pub async fn execute(Path(id): Path<DbId>, input: Option<Json<Value>>) -> AppResult<Json<Value>> {
    let Json(input_data) = input.unwrap_or_else(|| Json(Value::Null));
    let result = workflow_core::execution_summary(id, &input_data);
    Ok(Json(json!({ "result": result })))
}

/// POST /workflows/validate
///
/// Placeholder: every definition validates successfully.
pub async fn validate(definition: Option<Json<Value>>) -> Json<Value> {
    let Json(definition) = definition.unwrap_or_else(|| Json(Value::Null));
    let outcome = workflow_core::validate_definition(&definition);
    Json(json!({ "validationResults": outcome }))
}
