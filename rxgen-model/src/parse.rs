use indexmap::IndexMap;

use crate::{
    Error, FieldType, Result,
    validate::{validate_field_name, validate_model_name},
};

/// A validated model: its name and fields in declaration order.
///
/// Built once by [`parse`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModel {
    name: String,
    fields: IndexMap<String, FieldType>,
}

impl ParsedModel {
    /// The model (class) name, e.g. `Product`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields keyed by name, iterating in declaration order.
    pub fn fields(&self) -> &IndexMap<String, FieldType> {
        &self.fields
    }

    /// Module name of the generated file: the lowercased model name.
    pub fn module_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the model declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse and validate a model name and its `name:type` declarations.
///
/// Declarations are checked in order and the first failure is returned;
/// no partially built model escapes. An empty declaration list is valid.
///
/// # Errors
///
/// - [`Error::InvalidModelName`] for a bad model name, including one whose
///   lowercased module name is a Python keyword
/// - [`Error::InvalidFieldName`] for a field name that is not a usable identifier
/// - [`Error::MalformedField`] unless the declaration splits into exactly two non-empty parts
/// - [`Error::InvalidType`] if the type is not one of [`FieldType::ALL`]
/// - [`Error::DuplicateField`] if a field name is declared twice
pub fn parse<I, S>(model_name: &str, declarations: I) -> Result<ParsedModel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_model_name(model_name)?;

    let mut fields = IndexMap::new();
    for declaration in declarations {
        let (name, ty) = parse_declaration(declaration.as_ref())?;
        if fields.contains_key(name) {
            return Err(Box::new(Error::DuplicateField {
                name: name.to_string(),
            }));
        }
        fields.insert(name.to_string(), ty);
    }

    Ok(ParsedModel {
        name: model_name.to_string(),
        fields,
    })
}

fn parse_declaration(declaration: &str) -> Result<(&str, FieldType)> {
    let mut parts = declaration.split(':');
    let (Some(name), Some(tag), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::malformed_field(declaration));
    };
    if name.is_empty() || tag.is_empty() {
        return Err(Error::malformed_field(declaration));
    }

    validate_field_name(name)?;

    let ty = FieldType::from_tag(tag).ok_or_else(|| Error::invalid_type(name, tag))?;
    Ok((name, ty))
}
