//! Generate operation - model file and registration patches.

use rxgen_codegen::{Result, TargetLocation};
use rxgen_model::ParsedModel;

use crate::reports::{FileChange, GenerateReport, GenerationResult, PreviewFile};

/// Execute the generate operation.
///
/// Plans every file first; with `dry_run` the plan is only reported,
/// otherwise it is committed.
pub fn generate(
    model: &ParsedModel,
    target: &TargetLocation,
    dry_run: bool,
) -> Result<GenerateReport> {
    let plan = rxgen_codegen::plan(model, target)?;
    let root = target.root();

    let relative = |path: &std::path::Path| {
        path.strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    let result = if dry_run {
        let files = plan
            .files()
            .into_iter()
            .map(|f| PreviewFile {
                path: relative(f.path()),
                content: f.content().to_string(),
                action: f.action(),
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let committed = plan.commit()?;
        let changes = committed
            .files
            .iter()
            .map(|f| FileChange {
                path: relative(&f.path),
                action: f.action,
            })
            .collect();
        GenerationResult::Written(changes)
    };

    Ok(GenerateReport {
        model: model.name().to_string(),
        fields: model
            .fields()
            .iter()
            .map(|(name, ty)| (name.clone(), ty.to_string()))
            .collect(),
        app_name: target.app_name().to_string(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rxgen_codegen::FileAction;
    use tempfile::TempDir;

    use super::*;

    fn app() -> (TempDir, TargetLocation) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("rxconfig.py"), "").unwrap();
        let target = TargetLocation::discover(&root).unwrap();
        (temp, target)
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (_temp, target) = app();
        let model = rxgen_model::parse("User", ["name:str"]).unwrap();

        let report = generate(&model, &target, true).unwrap();

        match report.result {
            GenerationResult::Preview(files) => {
                let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
                assert_eq!(paths, ["models/user.py", "models/__init__.py", "rxconfig.py"]);
            }
            GenerationResult::Written(_) => panic!("expected preview"),
        }
        assert!(!target.models_dir().exists());
    }

    #[test]
    fn test_generate_writes_files() {
        let (_temp, target) = app();
        let model = rxgen_model::parse("User", ["name:str", "age:int"]).unwrap();

        let report = generate(&model, &target, false).unwrap();

        assert_eq!(report.model, "User");
        assert_eq!(report.app_name, "app");
        assert_eq!(
            report.fields,
            [
                ("name".to_string(), "str".to_string()),
                ("age".to_string(), "int".to_string())
            ]
        );
        match report.result {
            GenerationResult::Written(changes) => {
                assert_eq!(changes[0].path, "models/user.py");
                assert_eq!(changes[0].action, FileAction::Create);
                assert_eq!(changes[2].action, FileAction::Patch);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert!(target.model_path("user").is_file());
    }
}
