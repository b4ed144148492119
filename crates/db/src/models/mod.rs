//! Row structs and request DTOs for the workflow store.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the row set a stored
//!   procedure returns
//! - `Deserialize` DTOs for the camelCase request bodies the API accepts

pub mod external_service;
pub mod workflow;
pub mod workflow_action;
