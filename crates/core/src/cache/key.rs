//! Deterministic cache key derivation.
//!
//! Keys are built from an identity mapping (field name to JSON value). Fields
//! are sorted by name at every nesting level before hashing, so the order the
//! caller supplied them in never affects the key.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Namespace prefix for job search keys.
pub const JOBS_NAMESPACE: &str = "jobs";

/// Build a job search cache key from an identity mapping.
///
/// Null-valued fields are dropped, so an absent optional field and one sent as
/// `null` produce the same key.
pub fn build_key<I, K>(fields: I) -> String
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    build_namespaced_key(JOBS_NAMESPACE, fields)
}

/// Build a cache key under an explicit namespace.
///
/// Format: `<namespace>:<sha256 hex of canonical JSON>`.
pub fn build_namespaced_key<I, K>(namespace: &str, fields: I) -> String
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let identity: BTreeMap<String, Value> = fields
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.into(), canonicalize(value)))
        .collect();

    let canonical = Value::Object(identity.into_iter().collect::<Map<String, Value>>()).to_string();

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{namespace}:{}", hex::encode(hasher.finalize()))
}

/// Rebuild nested objects with their keys in sorted order.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
