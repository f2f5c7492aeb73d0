//! Validation utilities for Python identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// Python reserved keywords that cannot be used as identifiers
/// Source: https://docs.python.org/3/reference/lexical_analysis.html#keywords
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable Python identifier
/// Returns None if valid, Some(reason) if invalid
///
/// Only ASCII identifiers are accepted so the name also works as a module
/// file name on every filesystem.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Check that a name is importable as a Python package or module name.
/// Returns None if valid, Some(reason) if invalid
pub fn check_package_name(name: &str) -> Option<&'static str> {
    if is_python_keyword(name) {
        return Some("name is a Python reserved keyword");
    }
    validate_identifier(name)
}

/// Validate a field name used as a class attribute in generated code.
pub(crate) fn validate_field_name(name: &str) -> Result<()> {
    match check_package_name(name) {
        Some(reason) => Err(Error::invalid_field_name(name, reason)),
        None => Ok(()),
    }
}

/// Validate a model name: an identifier that reads as a class name and
/// whose lowercased form is a usable module name.
pub(crate) fn validate_model_name(name: &str) -> Result<()> {
    if let Some(reason) = check_package_name(name) {
        return Err(Error::invalid_model_name(name, reason));
    }

    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(Error::invalid_model_name(
            name,
            "model names must start with an uppercase letter",
        ));
    }

    let module = name.to_lowercase();
    if is_python_keyword(&module) {
        return Err(Error::invalid_model_name(
            name,
            format!("module name '{module}' is a Python reserved keyword"),
        ));
    }

    Ok(())
}

/// Find the span of a quoted string value in TOML source
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos, pattern.len())));
        }
    }
    None
}
