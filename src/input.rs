//! Boundary between upstream profile JSON and [`ProfileSnapshot`].
//!
//! Upstream payloads are loosely typed: numeric zip codes, camelCase keys from
//! the GraphQL layer, and education/work history sometimes stored as a JSON
//! string holding an array. All of that is normalized here so the scorer only
//! ever sees structured lists.

use crate::error::{ProfileError, Result};
use crate::types::profile::ProfileSnapshot;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub const STDIN_MARKER: &str = "-";

pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ProfileError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Parses one snapshot document. A JSON `null` document means "no profile".
pub fn parse_snapshot(text: &str) -> Result<Option<ProfileSnapshot>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Null => Ok(None),
        Value::Object(object) => Ok(Some(normalize(&object))),
        other => Err(ProfileError::InvalidSnapshot(format!(
            "expected a JSON object or null, found {}",
            kind(&other)
        ))),
    }
}

pub fn normalize(object: &Map<String, Value>) -> ProfileSnapshot {
    ProfileSnapshot {
        email: text_field(object, &["email"]),
        first_name: text_field(object, &["first_name", "firstName"]),
        last_name: text_field(object, &["last_name", "lastName"]),
        position: text_field(object, &["position"]),
        department: text_field(object, &["department"]),
        phone: text_field(object, &["phone"]),
        street_address: text_field(object, &["street_address", "streetAddress"]),
        city: text_field(object, &["city"]),
        state_province: text_field(object, &["state_province", "stateProvince"]),
        zip_code: text_field(object, &["zip_code", "zipCode"]),
        country: text_field(object, &["country"]),
        bio: text_field(object, &["bio"]),
        education: list_field(object, &["education"]),
        work_history: list_field(object, &["work_history", "workHistory"]),
    }
}

/// First non-null value among `keys`, preferring one that is not a blank string.
fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    let mut candidates = keys
        .iter()
        .filter_map(|key| object.get(*key))
        .filter(|value| !value.is_null());
    let first = candidates.next()?;
    if !is_blank(first) {
        return Some(first);
    }
    candidates.find(|value| !is_blank(value)).or(Some(first))
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(text) if text.trim().is_empty())
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match lookup(object, keys)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        other => {
            debug!(field = keys[0], kind = kind(other), "ignoring non-text field");
            None
        }
    }
}

fn list_field(object: &Map<String, Value>, keys: &[&str]) -> Option<Vec<Value>> {
    match lookup(object, keys)? {
        Value::Array(items) => Some(items.clone()),
        Value::String(encoded) if encoded.trim().is_empty() => None,
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => Some(items),
            Ok(other) => {
                warn!(field = keys[0], kind = kind(&other), "encoded list is not an array");
                None
            }
            Err(err) => {
                warn!(field = keys[0], error = %err, "could not decode encoded list");
                None
            }
        },
        other => {
            debug!(field = keys[0], kind = kind(other), "ignoring non-list field");
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
