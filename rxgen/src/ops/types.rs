//! Types operation - the closed set of field types.

use rxgen_model::FieldType;

use crate::reports::TypesReport;

pub fn types() -> TypesReport {
    TypesReport {
        types: FieldType::ALL.iter().map(FieldType::to_string).collect(),
    }
}
