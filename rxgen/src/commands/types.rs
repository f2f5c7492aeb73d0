use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Print the allowed field types
pub fn run() -> Result<()> {
    ops::types().render(&mut TerminalOutput::new());
    Ok(())
}
