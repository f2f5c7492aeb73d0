use std::fmt;

/// Type tag of a model field.
///
/// The set is closed: a declaration naming anything else is rejected while
/// parsing, so rendering only ever sees these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Str,
    Bool,
    Date,
    DateTime,
}

impl FieldType {
    /// Every allowed type, in the order they are listed to users.
    pub const ALL: [FieldType; 6] = [
        FieldType::Int,
        FieldType::Float,
        FieldType::Str,
        FieldType::Bool,
        FieldType::Date,
        FieldType::DateTime,
    ];

    /// The tag as written in a declaration and in generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Str => "str",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
        }
    }

    /// Look up a tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == tag)
    }

    /// Whether the type lives in Python's `datetime` module.
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldType::Date | FieldType::DateTime)
    }

    /// Comma-separated list of allowed tags, for error messages.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(FieldType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
