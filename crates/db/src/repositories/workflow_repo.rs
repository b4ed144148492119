//! Repository for workflow records.

use calo_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::workflow::Workflow;

/// Provides CRUD operations for workflows via stored procedures.
pub struct WorkflowRepo;

impl WorkflowRepo {
    /// Create a workflow, returning the record with its assigned identifier.
    ///
    /// Fails with [`StoreError::MissingWorkflowId`] if the procedure does
    /// not hand back an identifier.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
    ) -> Result<Workflow, StoreError> {
        let workflow_id: Option<DbId> =
            sqlx::query_scalar("SELECT create_workflow($1, $2) AS workflow_id")
                .bind(name)
                .bind(description)
                .fetch_one(pool)
                .await?;

        let id = workflow_id.ok_or(StoreError::MissingWorkflowId)?;
        Ok(Workflow {
            id,
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Update a workflow. Returns `None` when the store reports no row
    /// touched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        description: &str,
    ) -> Result<Option<Workflow>, StoreError> {
        let updated: bool = sqlx::query_scalar("SELECT update_workflow($1, $2, $3) AS updated")
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await?;

        if updated {
            Ok(Some(Workflow {
                id,
                name: name.to_string(),
                description: description.to_string(),
            }))
        } else {
            Ok(None)
        }
    }

    /// Find a workflow by its identifier.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workflow>, StoreError> {
        sqlx::query_as::<_, Workflow>("SELECT id, name, description FROM get_workflow($1)")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// List all workflows. An empty store yields an empty list; the
    /// not-found policy for collections belongs to the HTTP layer.
    pub async fn list(pool: &PgPool) -> Result<Vec<Workflow>, StoreError> {
        sqlx::query_as::<_, Workflow>("SELECT id, name, description FROM get_workflows()")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Delete a workflow. Returns the store's own deletion indicator.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT delete_workflow($1) AS deleted")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
