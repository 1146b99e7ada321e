//! Hex rendering for `%x` / `%X`.
//!
//! A byte sequence prints as a hex dump: every byte is rendered on its own
//! with the directive's spec and the tokens are concatenated, so
//! `[0x0A, 0xFF, 0x01]` under `%02X` gives `0AFF01` rather than one
//! multi-byte integer.

use crate::error::FormatError;
use crate::render::format_hex;
use crate::spec::{HexCase, PaddingSpec, ensure_no_precision};
use crate::value::Value;

/// Render `argument` as hex.
///
/// Integers render as a single token (negative `int`s as their 64-bit two's
/// complement); byte sequences render one token per byte.
pub fn render_hex(argument: &Value, spec: &PaddingSpec, case: HexCase) -> Result<String, FormatError> {
    let conversion = case.conversion();
    ensure_no_precision(spec, conversion)?;

    let uppercase = case == HexCase::Upper;
    let mut out = String::new();
    match argument {
        Value::Bytes(bytes) => {
            for &b in bytes {
                format_hex(u64::from(b), uppercase, spec, &mut out);
            }
        }
        Value::Byte(b) => format_hex(u64::from(*b), uppercase, spec, &mut out),
        Value::Int(v) => format_hex(*v as u64, uppercase, spec, &mut out),
        other => return Err(FormatError::type_mismatch(conversion, other.type_name())),
    }
    Ok(out)
}
