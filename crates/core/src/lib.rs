//! Shared domain types and pure helpers used across the workspace.

pub mod error;
pub mod ordering;
pub mod text;
pub mod types;
