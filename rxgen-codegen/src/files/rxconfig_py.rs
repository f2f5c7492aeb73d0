use std::path::{Path, PathBuf};

use rxgen_core::FileRules;

use super::Patch;
use crate::BOOTSTRAP_FILE;

/// Import of a model module at the top of `rxconfig.py`
pub struct RxconfigPy {
    import_path: String,
}

impl RxconfigPy {
    /// `import_path` is the dotted module path, e.g. `app.models.user`
    pub fn new(import_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
        }
    }
}

impl Patch for RxconfigPy {
    /// `base` is the application root
    fn path(&self, base: &Path) -> PathBuf {
        base.join(BOOTSTRAP_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::existing()
    }

    fn segment(&self) -> String {
        format!("import {}\n\n", self.import_path)
    }
}

#[cfg(test)]
mod tests {
    use rxgen_core::Overwrite;

    use super::*;

    #[test]
    fn test_exact_prefix() {
        let patch = RxconfigPy::new("app.models.user");
        assert_eq!(
            patch.apply(Some("X\n")).as_deref(),
            Some("import app.models.user\n\nX\n")
        );
    }

    #[test]
    fn test_empty_bootstrap() {
        let patch = RxconfigPy::new("app.models.user");
        assert_eq!(
            patch.apply(Some("")).as_deref(),
            Some("import app.models.user\n\n")
        );
    }

    #[test]
    fn test_already_imported() {
        let patch = RxconfigPy::new("app.models.user");
        let current = "import app.models.user\n\nimport reflex as rx\n";
        assert_eq!(patch.apply(Some(current)), None);
    }

    #[test]
    fn test_never_created() {
        assert_eq!(RxconfigPy::new("a.b").rules().overwrite, Overwrite::Existing);
    }
}
