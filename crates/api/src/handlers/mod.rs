//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers check required-field presence, delegate to the corresponding
//! repository in `calo_db`, and map store-error kinds to the endpoint's
//! status/message pair via [`crate::error::AppError`].

pub mod external_service;
pub mod workflow;
pub mod workflow_action;
