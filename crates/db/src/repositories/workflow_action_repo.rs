//! Repository for ordered workflow actions.

use calo_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::workflow_action::{ActionDetails, WorkflowAction};

/// Pass-through operations for workflow actions.
pub struct WorkflowActionRepo;

impl WorkflowActionRepo {
    /// Append an action to a workflow.
    ///
    /// The procedure enforces workflow existence, action-type validity, and
    /// the optional external-service reference; each violation surfaces as
    /// its own [`StoreError`] kind.
    pub async fn add(
        pool: &PgPool,
        workflow_id: DbId,
        details: &ActionDetails,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("SELECT add_workflow_action($1, $2, $3, $4, $5)")
            .bind(workflow_id)
            .bind(details.ordinal)
            .bind(&details.action_type)
            .bind(&details.action_data)
            .bind(details.external_service_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Database(sqlx::Error::RowNotFound));
        }
        Ok(())
    }

    /// Remove an action from a workflow.
    pub async fn remove(pool: &PgPool, workflow_id: DbId, action_id: DbId) -> Result<(), StoreError> {
        sqlx::query("SELECT delete_workflow_action($1, $2)")
            .bind(workflow_id)
            .bind(action_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List the actions of a workflow, in stored order.
    pub async fn list(pool: &PgPool, workflow_id: DbId) -> Result<Vec<WorkflowAction>, StoreError> {
        sqlx::query_as::<_, WorkflowAction>(
            "SELECT id, workflow_id, ordinal, action_type, action_data, external_service_id
             FROM get_workflow_actions($1)",
        )
        .bind(workflow_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
