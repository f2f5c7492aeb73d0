//! Optional per-project settings read from `rxgen.toml`.

use std::{io, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Error, Result,
    validate::{check_package_name, find_value_span},
};

/// File name of the project settings, looked up in the application root.
pub const CONFIG_FILE: &str = "rxgen.toml";

const DEFAULT_MODELS_DIR: &str = "models";

/// Root of `rxgen.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub models: ModelsConfig,
}

/// `[app]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Root package used in import paths (defaults to the root directory name)
    pub name: Option<String>,
}

/// `[models]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelsConfig {
    /// Models directory, relative to the application root, `/`-separated
    #[serde(default = "default_models_dir")]
    pub directory: String,
}

fn default_models_dir() -> String {
    DEFAULT_MODELS_DIR.to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            directory: default_models_dir(),
        }
    }
}

impl ModelsConfig {
    /// Path segments of the models directory, e.g. `["db", "models"]`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.directory.split('/')
    }
}

impl Config {
    /// Load `rxgen.toml` from `root`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Box::new(Error::Io {
                path,
                source: e,
            })),
        }
    }

    /// Parse settings from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if let Some(name) = &self.app.name {
            if let Some(reason) = check_package_name(name) {
                return Err(Error::validation_at(
                    format!("invalid app name '{name}': {reason}"),
                    src,
                    filename,
                    find_value_span(src, name),
                ));
            }
        }

        let directory = &self.models.directory;
        if let Some(reason) = self.models.segments().find_map(check_package_name) {
            return Err(Error::validation_at(
                format!("invalid models directory '{directory}': {reason}"),
                src,
                filename,
                find_value_span(src, directory),
            ));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}
