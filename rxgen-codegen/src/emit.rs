use std::{
    io,
    path::{Path, PathBuf},
};

use rxgen_core::{File, GeneratedFile, Overwrite};
use rxgen_model::ParsedModel;
use tracing::{debug, info};

use crate::{
    Error, Result, TargetLocation,
    files::{InitPy, ModelPy, Patch, RxconfigPy},
};

/// What committing a planned file does to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// The file does not exist yet and will be created
    Create,
    /// The file exists and its content will be replaced
    Overwrite,
    /// A segment will be inserted at the top of the file
    Patch,
    /// The file already holds the segment and is left alone
    Unchanged,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Create => "create",
            FileAction::Overwrite => "overwrite",
            FileAction::Patch => "patch",
            FileAction::Unchanged => "unchanged",
        }
    }
}

/// A file with its final content, ready to be written.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    file: File,
    action: FileAction,
}

impl PlannedFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Content the file will hold after commit
    pub fn content(&self) -> &str {
        self.file.content()
    }

    pub fn action(&self) -> FileAction {
        self.action
    }

    fn commit(&self) -> Result<CommittedFile> {
        let path = self.path().to_path_buf();
        if self.action == FileAction::Unchanged {
            debug!(path = %path.display(), "already up to date");
            return Ok(CommittedFile {
                path,
                action: self.action,
            });
        }

        match self.file.write() {
            Ok(_) => {
                info!(path = %path.display(), action = self.action.as_str(), "wrote file");
                Ok(CommittedFile {
                    path,
                    action: self.action,
                })
            }
            Err(e)
                if e.kind() == io::ErrorKind::NotFound
                    && self.file.rules().overwrite == Overwrite::Existing =>
            {
                Err(Error::MissingBootstrapFile { path })
            }
            Err(e) => Err(Error::io("write", path, e)),
        }
    }
}

/// A file as written by [`EmitPlan::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedFile {
    pub path: PathBuf,
    pub action: FileAction,
}

/// Outcome of a committed plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Name of the generated model
    pub model: String,
    /// Files in commit order: model, index, bootstrap
    pub files: Vec<CommittedFile>,
}

/// Every output of one generation request, rendered and checked but not written.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    model: String,
    source: PlannedFile,
    index: PlannedFile,
    bootstrap: PlannedFile,
}

impl EmitPlan {
    /// Planned files in commit order: model, index, bootstrap.
    pub fn files(&self) -> [&PlannedFile; 3] {
        [&self.source, &self.index, &self.bootstrap]
    }

    /// Write the model file, then the index, then the bootstrap file.
    ///
    /// Writes are not rolled back. If the bootstrap file vanished after
    /// [`plan`], this fails with [`Error::MissingBootstrapFile`] and the model
    /// and index files stay as written.
    pub fn commit(self) -> Result<EmitReport> {
        let mut files = Vec::with_capacity(3);
        for planned in self.files() {
            files.push(planned.commit()?);
        }
        Ok(EmitReport {
            model: self.model,
            files,
        })
    }
}

/// Render every output for `model` and check all preconditions, without writing.
///
/// # Errors
///
/// - [`Error::ModelsDirNotDirectory`] if the models path is taken by a file
/// - [`Error::MissingBootstrapFile`] if `rxconfig.py` does not exist
/// - [`Error::Io`] if an existing file cannot be read
pub fn plan(model: &ParsedModel, target: &TargetLocation) -> Result<EmitPlan> {
    let models_dir = target.models_dir();
    if models_dir.exists() && !models_dir.is_dir() {
        return Err(Error::ModelsDirNotDirectory { path: models_dir });
    }

    let file = ModelPy::new(model).to_file(&models_dir);
    let action = if file.exists() {
        FileAction::Overwrite
    } else {
        FileAction::Create
    };
    let source = PlannedFile { file, action };

    let index = plan_patch(&InitPy::new(model), &models_dir)?;

    let bootstrap = RxconfigPy::new(target.import_path(&model.module_name()));
    let bootstrap = plan_patch(&bootstrap, target.root())?;

    for planned in [&source, &index, &bootstrap] {
        debug!(
            path = %planned.path().display(),
            action = planned.action().as_str(),
            "planned file"
        );
    }

    Ok(EmitPlan {
        model: model.name().to_string(),
        source,
        index,
        bootstrap,
    })
}

/// Plan and commit in one step.
pub fn emit(model: &ParsedModel, target: &TargetLocation) -> Result<EmitReport> {
    plan(model, target)?.commit()
}

fn plan_patch(patch: &impl Patch, base: &Path) -> Result<PlannedFile> {
    let path = patch.path(base);
    let current = read_optional(&path)?;
    if current.is_none() && patch.rules().overwrite == Overwrite::Existing {
        return Err(Error::MissingBootstrapFile { path });
    }

    let (content, action) = match (patch.apply(current.as_deref()), current) {
        (Some(content), None) => (content, FileAction::Create),
        (Some(content), Some(_)) => (content, FileAction::Patch),
        (None, current) => (current.unwrap_or_default(), FileAction::Unchanged),
    };

    Ok(PlannedFile {
        file: File::with_rules(path, content, patch.rules()),
        action,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io("read", path, e)),
    }
}
