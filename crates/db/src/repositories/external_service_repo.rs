//! Repository for external services attached to a workflow.

use calo_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::external_service::{ExternalService, ExternalServiceDetails};

/// Pass-through operations for workflow external services.
pub struct ExternalServiceRepo;

impl ExternalServiceRepo {
    /// Attach an external service to a workflow.
    ///
    /// Referential checks (workflow existence) are enforced by the
    /// procedure; a missing workflow surfaces as
    /// [`StoreError::WorkflowNotFound`].
    pub async fn add(
        pool: &PgPool,
        workflow_id: DbId,
        details: &ExternalServiceDetails,
    ) -> Result<(), StoreError> {
        sqlx::query("SELECT add_external_service($1, $2, $3)")
            .bind(workflow_id)
            .bind(&details.name)
            .bind(&details.endpoint)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Detach an external service from a workflow.
    pub async fn remove(
        pool: &PgPool,
        workflow_id: DbId,
        service_id: DbId,
    ) -> Result<(), StoreError> {
        sqlx::query("SELECT remove_external_service($1, $2)")
            .bind(workflow_id)
            .bind(service_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List the external services attached to a workflow.
    pub async fn list(pool: &PgPool, workflow_id: DbId) -> Result<Vec<ExternalService>, StoreError> {
        sqlx::query_as::<_, ExternalService>(
            "SELECT id, workflow_id, name, endpoint FROM list_external_services($1)",
        )
        .bind(workflow_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
