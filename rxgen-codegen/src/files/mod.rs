//! Generated and patched files.

use std::path::{Path, PathBuf};

use rxgen_core::{FileRules, contains_line, prepend};

mod init_py;
mod model_py;
mod rxconfig_py;

pub use init_py::InitPy;
pub use model_py::ModelPy;
pub use rxconfig_py::RxconfigPy;

/// A text segment inserted at the top of an existing (or new) file.
pub trait Patch {
    /// Path of the patched file
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing the patched file
    fn rules(&self) -> FileRules;

    /// Segment placed before the current content
    fn segment(&self) -> String;

    /// Compute the patched content from the current one (`None` if the file is absent).
    ///
    /// Returns `None` when the segment's first line is already present, so
    /// applying a patch twice leaves the file unchanged.
    fn apply(&self, current: Option<&str>) -> Option<String> {
        let segment = self.segment();
        let current = current.unwrap_or_default();
        let first_line = segment.lines().next().unwrap_or_default();
        if contains_line(current, first_line) {
            return None;
        }
        Some(prepend(&segment, current))
    }
}
