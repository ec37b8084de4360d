// src/core/json.rs
//
// Small accessors for XNAT's loosely-shaped JSON.

use serde_json::{Map, Value};

use crate::error::ExtractError;

pub type Object = Map<String, Value>;

/// Render a scalar as the text a spreadsheet cell would show.
/// `null` renders as empty; arrays/objects fall back to their JSON text.
pub fn value_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `obj[key]` as text, or `""` when absent.
pub fn text_or_empty(obj: &Object, key: &str) -> String {
    obj.get(key).map(value_text).unwrap_or_default()
}

/// `obj[key]` as text, or `None` when absent.
pub fn text_opt(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).map(value_text)
}

pub fn object<'a>(v: &'a Value, path: &'static str) -> Result<&'a Object, ExtractError> {
    v.as_object().ok_or(ExtractError::Shape { path, expected: "an object" })
}

pub fn array<'a>(v: &'a Value, path: &'static str) -> Result<&'a Vec<Value>, ExtractError> {
    v.as_array().ok_or(ExtractError::Shape { path, expected: "an array" })
}

/// `obj[key]`, required.
pub fn member<'a>(obj: &'a Object, key: &str, path: &'static str) -> Result<&'a Value, ExtractError> {
    obj.get(key).ok_or(ExtractError::Missing(path))
}
