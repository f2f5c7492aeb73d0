use std::path::{Path, PathBuf};

use rxgen_model::{Config, check_package_name};

use crate::{Error, Result};

/// Marker and bootstrap file of a Reflex application.
pub const BOOTSTRAP_FILE: &str = "rxconfig.py";

/// Package index of the models directory.
pub const INDEX_FILE: &str = "__init__.py";

/// Extension of generated model modules (without the dot).
pub const EXTENSION: &str = "py";

/// Where generated files go inside an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    root: PathBuf,
    app_name: String,
    models: Vec<String>,
}

impl TargetLocation {
    /// Create a location rooted at `root` without checking for the marker file.
    ///
    /// The application name is the final segment of `root`, which must be
    /// importable as a Python package.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::configured(root.into(), &Config::default())
    }

    /// Resolve the application rooted at `dir`, which must contain `rxconfig.py`.
    ///
    /// Ancestors of `dir` are not searched.
    pub fn discover(dir: &Path) -> Result<Self> {
        Self::discover_with(dir, &Config::default())
    }

    /// Resolve the application rooted at `dir` with `rxgen.toml` overrides applied.
    ///
    /// A configured `[app] name` replaces the directory name, so roots such as
    /// `my-app` are usable once configured.
    pub fn discover_with(dir: &Path, config: &Config) -> Result<Self> {
        if !dir.join(BOOTSTRAP_FILE).is_file() {
            return Err(Error::ApplicationRootNotFound {
                dir: dir.to_path_buf(),
            });
        }
        Self::configured(dir.to_path_buf(), config)
    }

    fn configured(root: PathBuf, config: &Config) -> Result<Self> {
        let app_name = match &config.app.name {
            Some(name) => name.clone(),
            None => derive_app_name(&root)?,
        };

        Ok(Self {
            root,
            app_name,
            models: config.models.segments().map(str::to_string).collect(),
        })
    }

    /// Application root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root package segment used in import paths.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn models_dir(&self) -> PathBuf {
        self.models.iter().fold(self.root.clone(), |dir, s| dir.join(s))
    }

    pub fn model_path(&self, module: &str) -> PathBuf {
        self.models_dir().join(format!("{module}.{EXTENSION}"))
    }

    pub fn index_path(&self) -> PathBuf {
        self.models_dir().join(INDEX_FILE)
    }

    pub fn bootstrap_path(&self) -> PathBuf {
        self.root.join(BOOTSTRAP_FILE)
    }

    /// Dotted import path of a model module, e.g. `app.models.user`.
    pub fn import_path(&self, module: &str) -> String {
        let mut segments = Vec::with_capacity(self.models.len() + 2);
        segments.push(self.app_name.as_str());
        segments.extend(self.models.iter().map(String::as_str));
        segments.push(module);
        segments.join(".")
    }
}

fn derive_app_name(root: &Path) -> Result<String> {
    let invalid = |reason| Error::InvalidAppName {
        root: root.to_path_buf(),
        reason,
    };

    let name = root
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| invalid("directory has no usable name"))?;
    if let Some(reason) = check_package_name(name) {
        return Err(invalid(reason));
    }
    Ok(name.to_string())
}
