use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed field declaration '{declaration}'")]
    #[diagnostic(
        code(rxgen::malformed_field),
        help("declare fields as name:type, e.g. 'title:str'")
    )]
    MalformedField { declaration: String },

    #[error("invalid type '{ty}' for field '{field}'")]
    #[diagnostic(code(rxgen::invalid_type), help("allowed types are: {allowed}"))]
    InvalidType {
        field: String,
        ty: String,
        allowed: String,
    },

    #[error("invalid model name '{name}': {reason}")]
    #[diagnostic(
        code(rxgen::invalid_model_name),
        help("model names are class names starting with an uppercase letter, e.g. 'Product'")
    )]
    InvalidModelName { name: String, reason: String },

    #[error("invalid field name '{name}': {reason}")]
    #[diagnostic(
        code(rxgen::invalid_field_name),
        help(
            "use only letters, numbers, and underscores, starting with a letter or underscore. Rename keywords with a suffix, e.g. 'class_'"
        )
    )]
    InvalidFieldName { name: String, reason: String },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(rxgen::duplicate_field),
        help("each field may be declared only once")
    )]
    DuplicateField { name: String },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rxgen.toml")]
    #[diagnostic(code(rxgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(rxgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a malformed field error
    pub fn malformed_field(declaration: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedField {
            declaration: declaration.into(),
        })
    }

    /// Create an invalid type error listing every allowed type
    pub fn invalid_type(field: impl Into<String>, ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidType {
            field: field.into(),
            ty: ty.into(),
            allowed: crate::FieldType::allowed(),
        })
    }

    /// Create an invalid model name error
    pub fn invalid_model_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidModelName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid field name error
    pub fn invalid_field_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidFieldName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span
    pub fn validation_at(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_names_field_and_allowed_set() {
        let err = Error::invalid_type("age", "integer");
        assert_eq!(err.to_string(), "invalid type 'integer' for field 'age'");
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help, "allowed types are: int, float, str, bool, date, datetime");
    }

    #[test]
    fn test_error_codes() {
        let err = Error::malformed_field("name");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("rxgen::malformed_field"));
    }

    #[test]
    fn test_name_errors_carry_reason() {
        let err = Error::invalid_model_name(
            "Class",
            "module name 'class' is a Python reserved keyword",
        );
        assert_eq!(
            err.to_string(),
            "invalid model name 'Class': module name 'class' is a Python reserved keyword"
        );
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("rxgen::invalid_model_name"));

        let err = Error::invalid_field_name("class", "name is a Python reserved keyword");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("rxgen::invalid_field_name"));
    }
}
