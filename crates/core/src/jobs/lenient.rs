//! Forgiving field decoders for upstream job records.
//!
//! Scrapers disagree on types as well as names: amounts arrive as numbers or
//! numeric strings, ids as strings or integers. A value of an unusable type
//! decodes as `None` instead of failing the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field. Numbers and booleans are kept in their JSON spelling.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            mismatch("string", &other);
            None
        }
    })
}

/// Numeric field. Numeric strings such as `"50000"` are parsed.
pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                mismatch("number", &Value::String(s));
                None
            }
        },
        other => {
            mismatch("number", &other);
            None
        }
    })
}

/// Boolean field. `"true"`/`"false"` strings are accepted.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        other => {
            mismatch("boolean", &other);
            None
        }
    })
}

fn mismatch(expected: &str, found: &Value) {
    if !found.is_null() {
        tracing::debug!(expected, found = %found, "ignoring job field of unexpected type");
    }
}
