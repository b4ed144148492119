//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method maps to exactly one
//! stored-procedure call; results are reshaped into the model structs and
//! failures classified into [`crate::StoreError`] kinds.

pub mod external_service_repo;
pub mod workflow_action_repo;
pub mod workflow_repo;

pub use external_service_repo::ExternalServiceRepo;
pub use workflow_action_repo::WorkflowActionRepo;
pub use workflow_repo::WorkflowRepo;
