//! Conversions into and out of [`Value`].
//!
//! The `From` impls keep call sites terse (`cell.assign(10)`, not
//! `cell.assign(Value::Int(10))`). JSON interop goes through `serde_json`:
//! numbers become `Int` when they fit in `i64`, `Float` otherwise.

use std::collections::BTreeMap;

use super::Value;

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Unit,
            serde_json::Value::Bool(b) => Self::Bool(b),
            // With default serde_json features every non-i64 number yields
            // Some from as_f64; the NaN arm only triggers under the
            // arbitrary_precision feature, where a number can exceed f64.
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Unit => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(i) => Self::Number(i.into()),
            Value::Float(x) => serde_json::Number::from_f64(x).map_or(Self::Null, Self::Number),
            Value::Str(s) => Self::String(s),
            Value::List(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Map(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
