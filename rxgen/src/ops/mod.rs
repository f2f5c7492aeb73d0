//! Core operations.
//!
//! This module contains the business logic for the commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod types;

pub use generate::generate;
pub use types::types;
