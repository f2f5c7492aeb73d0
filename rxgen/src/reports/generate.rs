//! Generate command report data structures.

use rxgen_codegen::FileAction;

use super::output::{Output, Report};

/// Report data from model generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Model name.
    pub model: String,
    /// Fields as (name, type) in declaration order.
    pub fields: Vec<(String, String)>,
    /// Root package of import paths.
    pub app_name: String,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of model generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<FileChange>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file touched by generation, relative to the application root.
#[derive(Debug)]
pub struct FileChange {
    pub path: String,
    pub action: FileAction,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the application root.
    pub path: String,
    /// Content after generation.
    pub content: String,
    pub action: FileAction,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(changes) => self.render_written(out, changes),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_model(&self, out: &mut dyn Output) {
        out.key_value("Model", &format!("{} ({})", self.model, self.app_name));
        if self.fields.is_empty() {
            out.list_item("(no fields)");
        }
        for (name, ty) in &self.fields {
            out.list_item(&format!("{}: {}", name, ty));
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, changes: &[FileChange]) {
        self.render_model(out);

        out.section("Files");
        for change in changes {
            match change.action {
                FileAction::Create => out.added_item(&change.path),
                FileAction::Overwrite | FileAction::Patch => {
                    out.changed_item(&format!("{} ({})", change.path, change.action.as_str()))
                }
                FileAction::Unchanged => {
                    out.list_item(&format!("{} (unchanged)", change.path))
                }
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        self.render_model(out);

        for file in files {
            out.divider(&format!("{} ({})", file.path, file.action.as_str()));
            out.preformatted(&file.content);
        }

        let changed = files
            .iter()
            .filter(|f| f.action != FileAction::Unchanged)
            .count();
        out.divider("Summary");
        let noun = if changed == 1 { "file" } else { "files" };
        out.preformatted(&format!("{changed} {noun} would be written"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            model: "User".to_string(),
            fields: vec![("name".to_string(), "str".to_string())],
            app_name: "app".to_string(),
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(vec![
            FileChange {
                path: "models/user.py".to_string(),
                action: FileAction::Create,
            },
            FileChange {
                path: "models/__init__.py".to_string(),
                action: FileAction::Patch,
            },
            FileChange {
                path: "rxconfig.py".to_string(),
                action: FileAction::Unchanged,
            },
        ]));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Model: User (app)",
                "  - name: str",
                "",
                "Files:",
                "  + models/user.py",
                "  ~ models/__init__.py (patch)",
                "  - rxconfig.py (unchanged)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(vec![
            PreviewFile {
                path: "models/__init__.py".to_string(),
                content: "from .user import User\n".to_string(),
                action: FileAction::Create,
            },
            PreviewFile {
                path: "rxconfig.py".to_string(),
                content: "import app.models.user\n\n".to_string(),
                action: FileAction::Unchanged,
            },
        ]));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[3], "── models/__init__.py (create) ──");
        assert_eq!(out.lines[4], "from .user import User\n");
        assert_eq!(out.lines.last().unwrap(), "1 file would be written");
    }

    #[test]
    fn test_render_preview_counts_files() {
        let file = |action| PreviewFile {
            path: "models/user.py".to_string(),
            content: String::new(),
            action,
        };

        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(vec![
            file(FileAction::Create),
            file(FileAction::Patch),
        ]))
        .render(&mut out);
        assert_eq!(out.lines.last().unwrap(), "2 files would be written");

        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(vec![file(FileAction::Unchanged)])).render(&mut out);
        assert_eq!(out.lines.last().unwrap(), "0 files would be written");
    }
}
