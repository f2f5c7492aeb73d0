//! Types command report.

use super::output::{Output, Report};

/// The allowed field types.
#[derive(Debug)]
pub struct TypesReport {
    pub types: Vec<String>,
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Field types");
        for ty in &self.types {
            out.list_item(ty);
        }
    }
}
