//! Input validation functions
//!
//! Submitted metrics are only checked for presence; types and ranges are
//! accepted as sent.

use crate::errors::ValidationError;
use serde_json::Value;

/// Fields a metrics submission must contain, in the order they are checked
pub const REQUIRED_METRIC_FIELDS: [&str; 3] = ["heartRate", "bloodOxygen", "steps"];

/// Membership test for a field name against any JSON container.
///
/// Objects match on keys, arrays on string elements and strings on
/// substrings. Scalars cannot contain anything.
fn contains_field(body: &Value, field: &str) -> Result<bool, ValidationError> {
    match body {
        Value::Object(map) => Ok(map.contains_key(field)),
        Value::Array(items) => Ok(items.iter().any(|item| item.as_str() == Some(field))),
        Value::String(text) => Ok(text.contains(field)),
        Value::Null => Err(ValidationError::UnsupportedBody("null")),
        Value::Bool(_) => Err(ValidationError::UnsupportedBody("boolean")),
        Value::Number(_) => Err(ValidationError::UnsupportedBody("number")),
    }
}

/// Validate that a metrics submission carries every required field.
///
/// Reports the first missing field in `REQUIRED_METRIC_FIELDS` order.
/// A present key with a `null` value counts as present.
pub fn validate_required_fields(body: &Value) -> Result<(), ValidationError> {
    for field in REQUIRED_METRIC_FIELDS {
        if !contains_field(body, field)? {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}
