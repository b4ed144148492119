//! Workflow execution and validation.
//!
//! Both operations are placeholders: execution produces a formatted summary
//! without touching the store, and validation accepts every definition. The
//! real engine lives behind the external database and is out of scope here.

use serde::Serialize;
use serde_json::Value;

use crate::types::DbId;

/// Outcome of validating a workflow definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Produce the execution summary string for a workflow.
///
/// Pure and side-effect-free: repeated calls with the same arguments return
/// the identical string, and nothing in the store changes.
pub fn execution_summary(workflow_id: DbId, input: &Value) -> String {
    format!("Workflow {workflow_id} executed with input data: {input}")
}

/// Validate a workflow definition.
///
/// Always reports valid; no rule engine exists in this layer.
pub fn validate_definition(_definition: &Value) -> ValidationOutcome {
    ValidationOutcome {
        is_valid: true,
        errors: Vec::new(),
    }
}
