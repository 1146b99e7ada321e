//! JSON encoding of sprintf arguments.
//!
//! `null` is the nil slot. Booleans and strings map directly, integral JSON
//! numbers become `int`, every other number becomes `float`. Arrays become
//! arrays and objects become maps, except the single-key tagged objects
//!
//! - `{"$byte": 7}` for one byte,
//! - `{"$bytes": [10, 255]}` for a byte sequence,
//! - `{"$float": "NaN" | "Infinity" | "-Infinity"}` for non-finite floats.
//!
//! Map keys come back in `serde_json`'s key order.

use serde_json::Value as Json;
use sprintf_core::Value;

use crate::error::HarnessError;

/// Decode a JSON array of arguments.
pub fn args_from_json(json: &Json) -> Result<Vec<Option<Value>>, HarnessError> {
    let items = json.as_array().ok_or_else(|| HarnessError::ArgsNotArray {
        found: json_kind(json).to_string(),
    })?;
    items.iter().map(value_from_json).collect()
}

/// Decode one argument slot.
pub fn value_from_json(json: &Json) -> Result<Option<Value>, HarnessError> {
    let value = match json {
        Json::Null => return Ok(None),
        Json::Bool(b) => Value::Boolean(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if n.is_u64() {
                return Err(HarnessError::UnsupportedArgument(format!(
                    "integer {n} exceeds the int range"
                )));
            } else {
                let f = n
                    .as_f64()
                    .ok_or_else(|| HarnessError::UnsupportedArgument(format!("number {n}")))?;
                Value::Float(f)
            }
        }
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::Array(
            items
                .iter()
                .map(value_from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(map) => {
            if map.len() == 1
                && let Some((tag, inner)) = map.iter().next()
                && tag.starts_with('$')
            {
                decode_tagged(tag, inner)?
            } else {
                let entries = map
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), value_from_json(v)?)))
                    .collect::<Result<Vec<_>, HarnessError>>()?;
                Value::Map(entries)
            }
        }
    };
    Ok(Some(value))
}

fn decode_tagged(tag: &str, inner: &Json) -> Result<Value, HarnessError> {
    match tag {
        "$byte" => byte_from_json(inner).map(Value::Byte),
        "$bytes" => {
            let items = inner.as_array().ok_or_else(|| {
                HarnessError::UnsupportedArgument(format!("$bytes expects an array, got {inner}"))
            })?;
            let bytes = items
                .iter()
                .map(byte_from_json)
                .collect::<Result<Vec<u8>, _>>()?;
            Ok(Value::Bytes(bytes))
        }
        "$float" => match inner.as_str() {
            Some("NaN") => Ok(Value::Float(f64::NAN)),
            Some("Infinity") => Ok(Value::Float(f64::INFINITY)),
            Some("-Infinity") => Ok(Value::Float(f64::NEG_INFINITY)),
            _ => Err(HarnessError::UnsupportedArgument(format!(
                "$float expects NaN|Infinity|-Infinity, got {inner}"
            ))),
        },
        other => Err(HarnessError::UnsupportedArgument(format!(
            "unknown tag '{other}'"
        ))),
    }
}

fn byte_from_json(json: &Json) -> Result<u8, HarnessError> {
    json.as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| HarnessError::UnsupportedArgument(format!("{json} is not a byte")))
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
