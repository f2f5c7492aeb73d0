use std::path::{Path, PathBuf};

use rxgen_core::FileRules;
use rxgen_model::ParsedModel;

use super::Patch;
use crate::INDEX_FILE;

/// Re-export of a model in `models/__init__.py`, newest first
pub struct InitPy {
    module: String,
    class: String,
}

impl InitPy {
    pub fn new(model: &ParsedModel) -> Self {
        Self {
            module: model.module_name(),
            class: model.name().to_string(),
        }
    }
}

impl Patch for InitPy {
    /// `base` is the models directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INDEX_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn segment(&self) -> String {
        format!("from .{} import {}\n", self.module, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_py(name: &str) -> InitPy {
        InitPy::new(&rxgen_model::parse(name, ["id:int"]).unwrap())
    }

    #[test]
    fn test_segment() {
        assert_eq!(init_py("Product").segment(), "from .product import Product\n");
    }

    #[test]
    fn test_new_index_has_one_line() {
        assert_eq!(
            init_py("User").apply(None).as_deref(),
            Some("from .user import User\n")
        );
    }

    #[test]
    fn test_newest_first() {
        let existing = "from .a import A\n";
        assert_eq!(
            init_py("B").apply(Some(existing)).as_deref(),
            Some("from .b import B\nfrom .a import A\n")
        );
    }

    #[test]
    fn test_existing_registration_is_kept() {
        let existing = "from .a import A\nfrom .user import User\n";
        assert_eq!(init_py("User").apply(Some(existing)), None);
    }
}
