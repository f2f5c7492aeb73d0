use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for model generation
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no Reflex application found in '{}'", .dir.display())]
    #[diagnostic(
        code(rxgen::app_root_not_found),
        help("run the command at the root of your Reflex project, next to rxconfig.py")
    )]
    ApplicationRootNotFound { dir: PathBuf },

    #[error("cannot derive an application name from '{}': {reason}", .root.display())]
    #[diagnostic(
        code(rxgen::invalid_app_name),
        help("set [app] name in rxgen.toml")
    )]
    InvalidAppName { root: PathBuf, reason: &'static str },

    #[error("bootstrap file '{}' does not exist", .path.display())]
    #[diagnostic(
        code(rxgen::missing_bootstrap_file),
        help("rxconfig.py holds the project configuration and is never created automatically")
    )]
    MissingBootstrapFile { path: PathBuf },

    #[error("'{}' exists but is not a directory", .path.display())]
    #[diagnostic(code(rxgen::models_dir_not_directory))]
    ModelsDirNotDirectory { path: PathBuf },

    #[error("failed to {action} '{}'", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
