//! Per-type renderers.
//!
//! Each renderer appends exactly one token to `buf`. Tokens are right
//! justified within the spec's width; with the zero flag the padding goes
//! between the sign and the digits. Padding is bounded by
//! [`MAX_FIELD`](crate::spec::MAX_FIELD) per token.

use crate::spec::PaddingSpec;

/// Default `%f` precision.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

/// Render a signed decimal integer.
pub fn format_signed(value: i64, spec: &PaddingSpec, buf: &mut String) {
    let mut digits = [0u8; 64];
    let count = render_digits(value.unsigned_abs(), 10, false, &mut digits);
    let sign = (value < 0).then_some('-');
    emit_number(sign, &digits[64 - count..], spec, buf);
}

/// Render an unsigned integer in base 16.
pub fn format_hex(value: u64, uppercase: bool, spec: &PaddingSpec, buf: &mut String) {
    let mut digits = [0u8; 64];
    let count = render_digits(value, 16, uppercase, &mut digits);
    emit_number(None, &digits[64 - count..], spec, buf);
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

/// Render a fixed-point float with the spec's precision (default 6).
///
/// Rounds half-up on the shortest decimal form of `value`, so `1.005`
/// renders as `1.01` at precision 2.
pub fn format_float(value: f64, spec: &PaddingSpec, buf: &mut String) {
    if value.is_nan() {
        return format_special("NaN", spec, buf);
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return format_special(s, spec, buf);
    }

    let precision = spec.precision_or(DEFAULT_FLOAT_PRECISION);
    let body = format_fixed(value.abs(), precision);
    let sign = value.is_sign_negative().then_some('-');
    emit_number(sign, body.as_bytes(), spec, buf);
}

/// Fixed-point digits of a finite, non-negative `value`.
fn format_fixed(value: f64, precision: usize) -> String {
    // `{:e}` yields the shortest round-trip digits: "1.25678e1".
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: isize = exp.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|d| d - b'0')
        .collect();

    // Digits before the decimal point in `digits`.
    let point = exp + 1;
    let keep = point + precision as isize;

    let mut kept: Vec<u8> = (0..keep.max(0) as usize)
        .map(|i| digits.get(i).copied().unwrap_or(0))
        .collect();

    let round_up = keep >= 0 && digits.get(keep as usize).is_some_and(|&d| d >= 5);
    if round_up && increment(&mut kept) {
        kept.insert(0, 1);
    }
    while kept.len() < precision + 1 {
        kept.insert(0, 0);
    }

    let int_len = kept.len() - precision;
    let mut out = String::with_capacity(kept.len() + 1);
    out.extend(kept[..int_len].iter().map(|&d| char::from(b'0' + d)));
    if precision > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

/// Add one unit in the last place. Returns the carry out of the top digit.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

/// NaN and infinities ignore the zero flag.
fn format_special(s: &str, spec: &PaddingSpec, buf: &mut String) {
    let pad_total = spec.width().saturating_sub(s.len());
    pad(buf, ' ', pad_total);
    buf.push_str(s);
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Render a string; precision truncates, both counted in characters.
pub fn format_str(s: &str, spec: &PaddingSpec, buf: &mut String) {
    let effective = match spec.precision {
        Some(_) => {
            let max_chars = spec.precision_or(0);
            match s.char_indices().nth(max_chars) {
                Some((cut, _)) => &s[..cut],
                None => s,
            }
        }
        None => s,
    };
    let pad_total = spec.width().saturating_sub(effective.chars().count());
    pad(buf, ' ', pad_total);
    buf.push_str(effective);
}

/// Render a boolean as `true`/`false` (or upper case).
pub fn format_bool(value: bool, uppercase: bool, spec: &PaddingSpec, buf: &mut String) {
    let text = match (value, uppercase) {
        (true, false) => "true",
        (false, false) => "false",
        (true, true) => "TRUE",
        (false, true) => "FALSE",
    };
    format_str(text, spec, buf);
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Emit `sign` and ASCII `body` with width padding.
fn emit_number(sign: Option<char>, body: &[u8], spec: &PaddingSpec, buf: &mut String) {
    let content_len = sign.is_some() as usize + body.len();
    let pad_total = spec.width().saturating_sub(content_len);

    if !spec.zero_pad {
        pad(buf, ' ', pad_total);
    }
    if let Some(s) = sign {
        buf.push(s);
    }
    if spec.zero_pad {
        pad(buf, '0', pad_total);
    }
    buf.extend(body.iter().map(|&b| char::from(b)));
}

/// Render `value` in the given `base` into the END of `buf`.
/// Returns the number of digits written. Digits are placed right-aligned.
fn render_digits(mut value: u64, base: u64, uppercase: bool, buf: &mut [u8; 64]) -> usize {
    if value == 0 {
        buf[63] = b'0';
        return 1;
    }
    let alpha = if uppercase { b'A' } else { b'a' };
    let mut pos = 64;
    while value > 0 && pos > 0 {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
    }
    64 - pos
}

fn pad(buf: &mut String, c: char, count: usize) {
    buf.extend(std::iter::repeat_n(c, count));
}
