//! Assignment payload field access and coercion.
//!
//! Assignment requests arrive in several historical shapes: camelCase or
//! snake_case keys, numeric ids or natural-key names, explicit dates or a
//! legacy period index. This module provides the alias-table lookup and the
//! per-field coercion rules; the caller (the API normalizer) combines them
//! with database lookups into the canonical record.
//!
//! Alias precedence is fixed: the camelCase key wins when both spellings are
//! present. A JSON `null` counts as absent and falls through to the next
//! alias.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;

/// Percentage stored when the field is absent or empty.
pub const DEFAULT_PERCENTAGE: i64 = 100;

/// Look up the first present, non-null value among `names`, in order.
pub fn field<'a>(payload: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| payload.get(*name))
        .find(|value| !value.is_null())
}

/// Extract an id field (`camel` preferred over `snake`).
///
/// Numbers are accepted as-is; numeric strings are coerced to integers; an
/// empty string counts as absent (the caller falls back to name resolution).
/// Any other value fails validation with a message naming the field.
pub fn id_field(
    payload: &Map<String, Value>,
    camel: &str,
    snake: &str,
) -> Result<Option<DbId>, CoreError> {
    let Some(value) = field(payload, &[camel, snake]) else {
        return Ok(None);
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| CoreError::validation(format!("Assignment {camel} must be a number"))),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<DbId>().map(Some).map_err(|_| {
                CoreError::validation(format!("Assignment {camel} must be a number"))
            })
        }
        _ => Err(CoreError::validation(format!(
            "Assignment {camel} must be a number"
        ))),
    }
}

/// Extract a natural-key name field (`camel` preferred over `snake`).
///
/// Strings are trimmed; an empty or whitespace-only string counts as absent.
/// Numeric values are stringified so `{"personName": 42}` still resolves.
pub fn name_field(payload: &Map<String, Value>, camel: &str, snake: &str) -> Option<String> {
    match field(payload, &[camel, snake])? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a date field (`camel` preferred over `snake`).
///
/// Non-empty strings pass through bit-exact: no format validation, no
/// trimming. An empty string counts as absent so the caller falls back to
/// the period index.
pub fn date_field(payload: &Map<String, Value>, camel: &str, snake: &str) -> Option<String> {
    match field(payload, &[camel, snake])? {
        Value::String(s) => (!s.is_empty()).then(|| s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the legacy period index, if present.
pub fn period_field(payload: &Map<String, Value>) -> Result<Option<i64>, CoreError> {
    let Some(value) = field(payload, &["period"]) else {
        return Ok(None);
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| CoreError::validation("Assignment period must be a number".to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| CoreError::validation("Assignment period must be a number".to_string())),
        _ => Err(CoreError::validation(
            "Assignment period must be a number".to_string(),
        )),
    }
}

/// Extract the percentage, applying the default.
///
/// Absent, `null`, and `""` all yield [`DEFAULT_PERCENTAGE`]. Numbers and
/// numeric strings are coerced to integers (fractional values truncate, as
/// the original service did). Anything else fails validation. No bounds
/// check is applied.
pub fn percentage_field(payload: &Map<String, Value>) -> Result<i64, CoreError> {
    let Some(value) = field(payload, &["percentage"]) else {
        return Ok(DEFAULT_PERCENTAGE);
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| {
                CoreError::validation("Assignment percentage must be a number".to_string())
            }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(DEFAULT_PERCENTAGE);
            }
            trimmed.parse::<i64>().map_err(|_| {
                CoreError::validation("Assignment percentage must be a number".to_string())
            })
        }
        _ => Err(CoreError::validation(
            "Assignment percentage must be a number".to_string(),
        )),
    }
}
