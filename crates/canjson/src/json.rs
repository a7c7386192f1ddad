//! Adapter from `serde_json::Value` into the value model.

use crate::value::{Field, Value};

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            // numbers outside i64 fall back to their nearest f64
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(a) => Value::Seq(a.iter().map(Value::from).collect()),
            serde_json::Value::Object(m) => {
                Value::Map(m.iter().map(|(k, vv)| (k.clone(), Value::from(vv))).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

/// Like `From`, but every JSON object becomes a `Struct` whose members keep
/// document order and are all omit-if-empty.
pub fn omit_empty_members(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Array(a) => Value::Seq(a.iter().map(omit_empty_members).collect()),
        serde_json::Value::Object(m) => Value::Struct(
            m.iter()
                .map(|(k, vv)| Field::omit_empty(k.clone(), omit_empty_members(vv)))
                .collect(),
        ),
        other => Value::from(other),
    }
}
