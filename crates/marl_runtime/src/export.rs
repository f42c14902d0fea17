//! JSON export with representability filtering.
//!
//! Record keys are filtered one at a time: a record-valued key recurses
//! (and survives even when everything inside it was dropped); any other
//! key stays only if its value is deeply representable. Lists are
//! all-or-nothing: one unrepresentable element drops the whole list's key,
//! and records reached through a list are not re-filtered. Leading
//! underscores do not matter here; privacy guards attribute access, not
//! serialization.

use serde_json::{Map, Number, Value as Json};

use crate::core::value::{Record, Value};

pub fn export(value: &Value) -> Json {
    match value {
        Value::Record(record) => Json::Object(filter_record(record)),
        other => to_json(other).unwrap_or(Json::Null),
    }
}

/// Compact form, for files.
pub fn export_string(value: &Value) -> String {
    export(value).to_string()
}

/// Pretty form, for terminals.
pub fn export_string_pretty(value: &Value) -> String {
    format!("{:#}", export(value))
}

fn filter_record(record: &Record) -> Map<String, Json> {
    let mut out = Map::with_capacity(record.len());
    for (name, value) in record.iter() {
        match value {
            Value::Record(inner) => {
                out.insert(name.to_string(), Json::Object(filter_record(inner)));
            }
            other => {
                if let Some(json) = to_json(other) {
                    out.insert(name.to_string(), json);
                }
            }
        }
    }
    out
}

/// Lossless JSON image of a representable value. `None` marks the value,
/// and any list containing it, as unexportable. Non-finite floats have no
/// JSON form.
fn to_json(value: &Value) -> Option<Json> {
    match value {
        Value::Str(s) => Some(Json::String(s.to_string())),
        Value::Int(v) => Some(Json::Number(Number::from(*v))),
        Value::Float(v) => Number::from_f64(*v).map(Json::Number),
        Value::Bool(b) => Some(Json::Bool(*b)),
        Value::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items.iter() {
                out.push(to_json(item)?);
            }
            Some(Json::Array(out))
        }
        Value::Record(record) => {
            let mut out = Map::with_capacity(record.len());
            for (name, value) in record.iter() {
                out.insert(name.to_string(), to_json(value)?);
            }
            Some(Json::Object(out))
        }
        Value::Closure(_) | Value::Native(_) => None,
    }
}
