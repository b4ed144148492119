//! Handlers for the `/workflows/{id}/external-services` resource.

use axum::extract::{Path, State};
use axum::Json;
use calo_core::types::DbId;
use calo_db::models::external_service::AddExternalServiceRequest;
use calo_db::repositories::ExternalServiceRepo;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /workflows/{id}/external-services
pub async fn add(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
    Json(body): Json<AddExternalServiceRequest>,
) -> AppResult<Json<Value>> {
    let details = body
        .external_service_details
        .ok_or_else(|| AppError::BadRequest("External service details are required".into()))?;

    ExternalServiceRepo::add(&state.pool, workflow_id, &details)
        .await
        .map_err(|err| {
            AppError::from_store(
                err,
                AppError::BadRequest("Failed to add external service to the workflow".into()),
            )
        })?;

    Ok(Json(json!({
        "message": "External service added to the workflow successfully"
    })))
}

/// DELETE /workflows/{id}/external-services/{service_id}
pub async fn remove(
    State(state): State<AppState>,
    Path((workflow_id, service_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Value>> {
    ExternalServiceRepo::remove(&state.pool, workflow_id, service_id)
        .await
        .map_err(|err| {
            AppError::from_store(
                err,
                AppError::BadRequest("Failed to remove external service".into()),
            )
        })?;

    Ok(Json(json!({
        "message": "External service removed from the workflow successfully"
    })))
}

/// GET /workflows/{id}/external-services
pub async fn list(
    State(state): State<AppState>,
    Path(workflow_id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let external_services = ExternalServiceRepo::list(&state.pool, workflow_id)
        .await
        .map_err(|_| AppError::Internal("Failed to list external services".into()))?;

    if external_services.is_empty() && state.config.empty_collections_as_not_found {
        return Err(AppError::NotFound(
            "No external services found for the workflow".into(),
        ));
    }

    Ok(Json(json!({ "externalServices": external_services })))
}
