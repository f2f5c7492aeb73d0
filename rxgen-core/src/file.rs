use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Build a [`File`] rooted at `base` without touching the disk
    fn to_file(&self, base: &Path) -> File {
        File::with_rules(self.path(base), self.render(), self.rules())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// Existing file content was replaced
    Overwritten,
}

/// A file to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_rules(path, content, FileRules::default())
    }

    /// Create a new file with explicit write rules
    pub fn with_rules(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        rules: FileRules,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the write rules
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules.
    ///
    /// [`Overwrite::Existing`] files are never created: a missing file is
    /// reported as an [`io::ErrorKind::NotFound`] error.
    pub fn write(&self) -> io::Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                let existed = self.exists();
                write_file(&self.path, &self.content)?;
                Ok(if existed {
                    WriteResult::Overwritten
                } else {
                    WriteResult::Created
                })
            }
            Overwrite::Existing => {
                let mut file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .open(&self.path)?;
                file.write_all(self.content.as_bytes())?;
                Ok(WriteResult::Overwritten)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for a file that must already exist
    pub fn existing() -> Self {
        Self {
            overwrite: Overwrite::Existing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Create parent directories and write, replacing any prior content
    #[default]
    Always,
    /// Replace the content of a file that already exists; never create it
    Existing,
}
