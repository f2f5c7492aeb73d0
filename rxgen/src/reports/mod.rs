//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;
mod types;

pub use generate::{FileChange, GenerateReport, GenerationResult, PreviewFile};
pub use output::{Output, Report, TerminalOutput};
pub use types::TypesReport;

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Output that records every call as a line of text.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{name}:"));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{key}: {value}"));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("  - {text}"));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("  + {text}"));
        }

        fn changed_item(&mut self, text: &str) {
            self.lines.push(format!("  ~ {text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("── {label} ──"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}
