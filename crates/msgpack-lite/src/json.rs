//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! `serde_json::Value` stands in for a native associative container: map
//! keys must become strings. Text (`Bytes`) and integer keys are accepted,
//! any other key type is [`DecodeError::UnsupportedKeyType`]. When a key
//! repeats, the last value wins and the key keeps its first position.

use serde_json::{Map, Number};

use crate::error::DecodeError;
use crate::value::{IntRepr, Value};

/// Convert a decoded value into JSON.
pub fn to_json(value: &Value) -> Result<serde_json::Value, DecodeError> {
    Ok(match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => match n.n {
            IntRepr::PosInt(u) => serde_json::Value::from(u),
            IntRepr::NegInt(i) => serde_json::Value::from(i),
        },
        Value::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bytes(b) => serde_json::Value::String(utf8(b)?.to_owned()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(to_json).collect::<Result<_, _>>()?,
        ),
        Value::Map(pairs) => {
            let mut obj = Map::with_capacity(pairs.len());
            for (key, val) in pairs {
                obj.insert(json_key(key)?, to_json(val)?);
            }
            serde_json::Value::Object(obj)
        }
    })
}

/// Convert JSON into a value ready for encoding.
///
/// Numbers outside the integer range, or with a fractional part, become
/// [`Value::Float`] and will be refused by the encoder.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Value::from(u)
            } else if let Some(i) = n.as_i64() {
                Value::from(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(arr) => Value::Array(arr.iter().map(from_json).collect()),
        serde_json::Value::Object(obj) => Value::Map(
            obj.iter()
                .map(|(k, v)| (Value::from(k.as_str()), from_json(v)))
                .collect(),
        ),
    }
}

fn json_key(key: &Value) -> Result<String, DecodeError> {
    match key {
        Value::Bytes(b) => Ok(utf8(b)?.to_owned()),
        Value::Integer(n) => Ok(n.to_string()),
        other => Err(DecodeError::UnsupportedKeyType { kind: other.kind() }),
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, DecodeError> {
    std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}
