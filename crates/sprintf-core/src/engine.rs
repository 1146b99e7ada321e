//! Template scanner and directive dispatcher.
//!
//! The scanner copies literal runs verbatim and stops at each `%`. A `%`
//! that ends the template is literal. Otherwise the characters that are
//! ASCII digits or `.` form the raw padding spec and the next character is
//! the conversion. Every conversion except `%%` consumes one argument.

use crate::error::FormatError;
use crate::hex::render_hex;
use crate::render::{format_bool, format_float, format_signed, format_str};
use crate::spec::{Conversion, PaddingSpec, ensure_no_precision};
use crate::value::{Value, ValueKind};

/// Format `template` against `args`.
///
/// `None` slots are the nil value: `%s` renders them as nothing, every
/// other conversion rejects them. The first failure aborts the call.
///
/// ```
/// use sprintf_core::{Value, sprintf};
///
/// let out = sprintf("%s is awesome!", &[Some(Value::from("Rust"))]).unwrap();
/// assert_eq!(out, "Rust is awesome!");
/// ```
pub fn sprintf(template: &str, args: &[Option<Value>]) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut pos = 0;
    let mut next_arg = 0;

    while pos < len {
        // Literal run up to the next '%'.
        let start = pos;
        while pos < len && bytes[pos] != b'%' {
            pos += 1;
        }
        if pos > start {
            out.push_str(&template[start..pos]);
        }
        if pos >= len {
            break;
        }
        if pos + 1 == len {
            // Trailing '%' with nothing after: literal.
            out.push('%');
            break;
        }

        // --- padding spec ---
        let spec_start = pos + 1;
        let mut spec_end = spec_start;
        while spec_end < len && (bytes[spec_end].is_ascii_digit() || bytes[spec_end] == b'.') {
            spec_end += 1;
        }
        let raw_spec = &template[spec_start..spec_end];

        // --- conversion character ---
        let Some(c) = template[spec_end..].chars().next() else {
            return Err(FormatError::UnterminatedDirective);
        };
        if c == '%' {
            // Escape: emit one '%' and skip only the character after the
            // opening '%'. Any remaining padding is rescanned as text.
            out.push('%');
            pos = spec_start + 1;
            continue;
        }
        pos = spec_end + c.len_utf8();

        let Some(arg) = args.get(next_arg) else {
            return Err(FormatError::NotEnoughArguments);
        };
        let conversion =
            Conversion::from_char(c).ok_or(FormatError::InvalidFormatSpecifier { specifier: c })?;
        dispatch(conversion, raw_spec, arg.as_ref(), &mut out)?;
        next_arg += 1;
    }

    Ok(out)
}

/// Render one argument for one directive.
fn dispatch(
    conversion: Conversion,
    raw_spec: &str,
    arg: Option<&Value>,
    out: &mut String,
) -> Result<(), FormatError> {
    let c = conversion.as_char();
    let Some(value) = arg else {
        if conversion.accepts_nil() {
            return Ok(());
        }
        return Err(FormatError::nil_argument(c));
    };

    let spec = PaddingSpec::parse(raw_spec)
        .filter(|spec| !spec.zero_pad || conversion.accepts_zero_pad())
        .ok_or_else(|| FormatError::malformed_padding(c, raw_spec))?;
    let mismatch = || FormatError::type_mismatch(c, value.type_name());

    match (conversion, value.kind()) {
        // Only `false` is false; any non-boolean value counts as true.
        (Conversion::Boolean { upper }, _) => {
            format_bool(!matches!(value, Value::Boolean(false)), upper, &spec, out);
        }
        (Conversion::Decimal, ValueKind::Integer) => {
            ensure_no_precision(&spec, c)?;
            format_signed(value.as_int().ok_or_else(mismatch)?, &spec, out);
        }
        (Conversion::Float, ValueKind::Float) => {
            format_float(value.as_float().ok_or_else(mismatch)?, &spec, out);
        }
        (Conversion::Hex(case), ValueKind::Integer | ValueKind::ByteSequence) => {
            out.push_str(&render_hex(value, &spec, case)?);
        }
        (Conversion::Str, _) => format_str(&value.to_string(), &spec, out),
        (Conversion::Decimal | Conversion::Float | Conversion::Hex(_), _) => return Err(mismatch()),
    }
    Ok(())
}
