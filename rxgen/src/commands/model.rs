use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use rxgen_codegen::TargetLocation;
use rxgen_model::Config;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ModelCommand {
    /// Model name (PascalCase, e.g. Product)
    pub name: String,

    /// Field declarations as name:type (e.g. price:float)
    pub fields: Vec<String>,

    /// Application root (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ModelCommand {
    /// Run the model command
    pub fn run(&self) -> Result<()> {
        let model = rxgen_model::parse(&self.name, &self.fields).unwrap_or_exit();
        let target = resolve_target(self.root.as_deref())?;

        let report = ops::generate(&model, &target, self.dry_run).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

fn resolve_target(root: Option<&Path>) -> Result<TargetLocation> {
    let dir = match root {
        Some(root) => root
            .canonicalize()
            .wrap_err_with(|| format!("Failed to resolve '{}'", root.display()))?,
        None => std::env::current_dir().wrap_err("Failed to get current directory")?,
    };

    let config = Config::load(&dir).unwrap_or_exit();
    let target = TargetLocation::discover_with(&dir, &config).unwrap_or_exit();
    debug!(
        root = %target.root().display(),
        app = target.app_name(),
        models = %target.models_dir().display(),
        "resolved application"
    );
    Ok(target)
}
