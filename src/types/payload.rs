//! Dynamically-typed generation payloads with defaulted field access.
//!
//! A generation endpoint is a best-effort natural-language producer: the
//! payload might be missing expected keys, use unexpected casing, or nest
//! things differently than asked. [`Payload`] therefore exposes only
//! defaulted accessors — there is no panicking index operation, and every
//! consumer must supply a fallback for each field it reads.

use serde_json::Value;

/// A dynamically-validated tree extracted from a generation response.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

const EMPTY: &[Value] = &[];

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Wrap plain (non-JSON) generated text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }

    /// Raw field access. Prefer the defaulted accessors below.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field, or `default` when absent or not a string.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Unsigned integer field, or `default` when absent or not a number.
    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        self.0.get(key).and_then(Value::as_u64).unwrap_or(default)
    }

    /// Boolean field, or `default` when absent or not a boolean.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Array field, or an empty slice when absent or not an array.
    pub fn array(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY)
    }

    /// Array-of-strings field; non-string entries are skipped.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.array(key)
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// The whole payload as plain text, when it is one.
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Top-level object keys, empty when the payload is not an object.
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
