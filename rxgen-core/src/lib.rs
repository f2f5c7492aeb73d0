//! Core utilities for the Reflex model generator.
//!
//! This crate provides the file write rules and text patching primitives
//! shared by the generator crates.

mod file;
mod text;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Text patching
pub use text::{contains_line, prepend};
