// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Model generation for Reflex applications.
//!
//! Renders a [`ParsedModel`](rxgen_model::ParsedModel) into a model module,
//! registers it in the models package index and imports it from the
//! application's `rxconfig.py`.
//!
//! All reads, checks and rendering happen in [`plan`]; nothing touches the
//! disk until [`EmitPlan::commit`].

pub mod builder;
mod emit;
mod error;
pub mod files;
mod target;

pub use emit::{CommittedFile, EmitPlan, EmitReport, FileAction, PlannedFile, emit, plan};
pub use error::{Error, Result};
pub use target::{BOOTSTRAP_FILE, EXTENSION, INDEX_FILE, TargetLocation};
