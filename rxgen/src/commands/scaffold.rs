use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct ScaffoldCommand {
    /// Model name (PascalCase, e.g. Product)
    name: String,

    /// Field declarations as name:type (e.g. price:float)
    fields: Vec<String>,
}

impl ScaffoldCommand {
    /// Validate the declarations; resource scaffolding is not implemented yet.
    pub fn run(&self) -> Result<()> {
        let model = rxgen_model::parse(&self.name, &self.fields).unwrap_or_exit();

        let mut out = TerminalOutput::new();
        out.warning(&format!(
            "scaffolding is not available yet; run `reflex-generate model {}` to generate the model",
            model.name()
        ));

        Ok(())
    }
}
