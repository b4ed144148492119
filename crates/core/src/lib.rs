//! Shared domain types for the Calo workflow service.

pub mod types;
pub mod workflow;
