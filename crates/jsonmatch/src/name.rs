//! Type name normalization for matcher descriptions

/// Label used when a type name is empty
pub const UNKNOWN_TYPE: &str = "unknown type";

/// Label used when a type name is a bare array marker
pub const UNKNOWN_ARRAY_TYPE: &str = "array of unknown type";

/// Replace non-descriptive type names with stable labels
///
/// Only affects descriptions, never match verdicts.
pub fn normalize_type_name(raw: &str) -> &str {
    match raw {
        "" => UNKNOWN_TYPE,
        "[]" => UNKNOWN_ARRAY_TYPE,
        name => name,
    }
}
