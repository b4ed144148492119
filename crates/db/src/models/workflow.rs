//! Workflow models and DTOs.
//!
//! The row struct mirrors the column set returned by `get_workflow` /
//! `get_workflows`; the create/update DTO mirrors the request body the API
//! accepts. Presence of `name` and `description` is checked at the HTTP
//! boundary, so the DTO keeps them optional.

use calo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A workflow record as returned by the store.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Workflow {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// Request body for creating or updating a workflow.
///
/// Both fields are required and must be non-empty; the handler rejects the
/// request before any store call otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowDefinition {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl WorkflowDefinition {
    /// Extract `(name, description)` when both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (self.name.as_deref(), self.description.as_deref()) {
            (Some(name), Some(description)) if !name.is_empty() && !description.is_empty() => {
                Some((name, description))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_present() {
        let def = WorkflowDefinition {
            name: Some("Onboarding".into()),
            description: Some("New hire flow".into()),
        };
        assert_eq!(def.required_fields(), Some(("Onboarding", "New hire flow")));
    }

    #[test]
    fn required_fields_missing_description() {
        let def = WorkflowDefinition {
            name: Some("Onboarding".into()),
            description: None,
        };
        assert_eq!(def.required_fields(), None);
    }

    #[test]
    fn required_fields_rejects_empty_strings() {
        let def = WorkflowDefinition {
            name: Some(String::new()),
            description: Some("New hire flow".into()),
        };
        assert_eq!(def.required_fields(), None);
    }
}
