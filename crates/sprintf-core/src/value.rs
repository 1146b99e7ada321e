//! Host values as seen by the format engine.
//!
//! The runtime marshals every argument into a [`Value`] before calling the
//! engine. The nil value is not a variant: argument slots are
//! `Option<Value>` and `None` is nil.

use std::fmt;

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A dynamically-typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    /// A single byte.
    Byte(u8),
    Float(f64),
    Str(String),
    /// A byte sequence (`byte[]`).
    Bytes(Vec<u8>),
    Array(Vec<Option<Value>>),
    /// Key/value pairs in insertion order.
    Map(Vec<(String, Option<Value>)>),
}

/// Closed classification used for conversion dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
    ByteSequence,
    Other,
}

impl Value {
    /// Resolve the dispatch kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int(_) | Self::Byte(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::ByteSequence,
            Self::Array(_) | Self::Map(_) => ValueKind::Other,
        }
    }

    /// Runtime type name, as reported in conversion errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Byte(_) => "byte",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bytes(_) => "byte[]",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }

    /// Integer view for integer-kind values.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Byte(b) => Some(i64::from(b)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical string representation
// ---------------------------------------------------------------------------

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Float(v) => write_float(f, *v),
            Self::Str(s) => f.write_str(s),
            Self::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{b}")?;
                }
                f.write_str("]")
            }
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_nested(f, item.as_ref())?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key:?}:")?;
                    write_nested(f, item.as_ref())?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Members of containers: strings are quoted, nil is `()`.
fn write_nested(f: &mut fmt::Formatter<'_>, value: Option<&Value>) -> fmt::Result {
    match value {
        None => f.write_str(crate::error::NIL_MARKER),
        Some(Value::Str(s)) => write!(f, "{s:?}"),
        Some(other) => write!(f, "{other}"),
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        // Debug keeps a fractional part or exponent on every finite float.
        write!(f, "{v:?}")
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_closed_set() {
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::from(7_i64).kind(), ValueKind::Integer);
        assert_eq!(Value::from(7_u8).kind(), ValueKind::Integer);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(vec![1_u8]).kind(), ValueKind::ByteSequence);
        assert_eq!(Value::Array(Vec::new()).kind(), ValueKind::Other);
        assert_eq!(Value::Map(Vec::new()).kind(), ValueKind::Other);
    }

    #[test]
    fn floats_keep_fractional_part() {
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(12.5).to_string(), "12.5");
        assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn containers_quote_nested_strings_and_nil() {
        let array = Value::Array(vec![
            Some(Value::Int(1)),
            Some(Value::from("two")),
            None,
            Some(Value::Boolean(false)),
        ]);
        assert_eq!(array.to_string(), r#"[1,"two",(),false]"#);

        let map = Value::Map(vec![
            ("name".to_string(), Some(Value::from("ada"))),
            ("age".to_string(), Some(Value::Int(36))),
        ]);
        assert_eq!(map.to_string(), r#"{"name":"ada","age":36}"#);
    }

    #[test]
    fn byte_sequence_renders_as_decimal_list() {
        assert_eq!(Value::from(vec![10_u8, 255]).to_string(), "[10,255]");
        assert_eq!(Value::from(Vec::<u8>::new()).to_string(), "[]");
    }

    #[test]
    fn byte_widens_to_int() {
        assert_eq!(Value::Byte(200).as_int(), Some(200));
        assert_eq!(Value::from("7").as_int(), None);
    }
}
