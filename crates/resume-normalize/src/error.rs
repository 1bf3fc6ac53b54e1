use serde_json::Value;
use thiserror::Error;

/// The one failure the normalization engine can report.
///
/// Anything that IS a JSON object normalizes without error; shape problems
/// below the root are repaired, not rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("document root must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Human-readable JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
