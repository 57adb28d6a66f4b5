//! Shared building blocks for the workspace: logging setup and small wire types.

pub mod types;
pub mod utils;
