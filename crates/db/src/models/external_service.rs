//! External service models and DTOs.

use calo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An external service record as returned by `list_external_services`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExternalService {
    pub id: DbId,
    pub workflow_id: DbId,
    pub name: String,
    pub endpoint: String,
}

/// Details for registering an external service against a workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalServiceDetails {
    pub name: String,
    pub endpoint: String,
}

/// Request body for `POST /workflows/{id}/external-services`.
///
/// The `externalServiceDetails` wrapper is part of the wire contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExternalServiceRequest {
    pub external_service_details: Option<ExternalServiceDetails>,
}
