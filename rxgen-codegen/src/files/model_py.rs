use std::path::{Path, PathBuf};

use rxgen_core::{FileRules, GeneratedFile};
use rxgen_model::{FieldType, ParsedModel};

use crate::{EXTENSION, builder::CodeBuilder};

/// The model module, e.g. `models/product.py`
pub struct ModelPy<'a> {
    model: &'a ParsedModel,
}

impl<'a> ModelPy<'a> {
    pub fn new(model: &'a ParsedModel) -> Self {
        Self { model }
    }

    /// `datetime` names the fields refer to, in a stable order.
    fn temporal_imports(&self) -> Vec<&'static str> {
        FieldType::ALL
            .into_iter()
            .filter(|ty| ty.is_temporal() && self.model.fields().values().any(|f| f == ty))
            .map(|ty| ty.as_str())
            .collect()
    }
}

impl GeneratedFile for ModelPy<'_> {
    /// `base` is the models directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.{EXTENSION}", self.model.module_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python();

        let temporal = self.temporal_imports();
        if !temporal.is_empty() {
            builder
                .push_line(&format!("from datetime import {}", temporal.join(", ")))
                .push_blank();
        }

        builder
            .push_line("import reflex as rx")
            .push_blank()
            .push_blank()
            .push_line(&format!("class {}(rx.Model, table=True):", self.model.name()))
            .push_indent();

        if self.model.is_empty() {
            builder.push_line("pass");
        }
        for (name, ty) in self.model.fields() {
            builder.push_line(&format!("{name}: {ty}"));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, fields: &[&str]) -> String {
        let model = rxgen_model::parse(name, fields).unwrap();
        ModelPy::new(&model).render()
    }

    #[test]
    fn test_render_product() {
        let source = render("Product", &["name:str", "price:float", "in_stock:bool"]);
        insta::assert_snapshot!(source, @r"
        import reflex as rx


        class Product(rx.Model, table=True):
            name: str
            price: float
            in_stock: bool
        ");
    }

    #[test]
    fn test_render_exact_text() {
        assert_eq!(
            render("User", &["name:str", "age:int"]),
            "import reflex as rx\n\n\nclass User(rx.Model, table=True):\n    name: str\n    age: int\n"
        );
    }

    #[test]
    fn test_render_temporal_imports() {
        let source = render("Event", &["ends:datetime", "title:str", "starts:date"]);
        insta::assert_snapshot!(source, @r"
        from datetime import date, datetime

        import reflex as rx


        class Event(rx.Model, table=True):
            ends: datetime
            title: str
            starts: date
        ");
    }

    #[test]
    fn test_render_empty_model() {
        assert_eq!(
            render("Marker", &[]),
            "import reflex as rx\n\n\nclass Marker(rx.Model, table=True):\n    pass\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let model = rxgen_model::parse("Order", ["total:float", "placed:datetime"]).unwrap();
        assert_eq!(ModelPy::new(&model).render(), ModelPy::new(&model).render());
    }

    #[test]
    fn test_path_uses_lowercased_name() {
        let model = rxgen_model::parse("UserProfile", ["bio:str"]).unwrap();
        assert_eq!(
            ModelPy::new(&model).path(Path::new("models")),
            Path::new("models/userprofile.py")
        );
    }
}
