// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of model declarations.
//!
//! Turns a model name and a list of `name:type` declarations into a
//! [`ParsedModel`], and loads the optional `rxgen.toml` project settings.

mod config;
mod error;
mod field;
mod parse;
mod validate;

pub use config::{AppConfig, CONFIG_FILE, Config, ModelsConfig};
pub use error::{Error, Result};
pub use field::FieldType;
pub use parse::{ParsedModel, parse};
pub use validate::check_package_name;
