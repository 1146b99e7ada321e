//! Directive pieces: the padding spec and the conversion character.
//!
//! The scanner collects a padding spec lexically (any run of ASCII digits
//! and `.`). [`PaddingSpec::parse`] then validates it against the grammar
//!
//! ```text
//! ['0'] [width: [1-9][0-9]*] ['.' precision: [0-9]+]
//! ```
//!
//! and returns `None` for anything else; the engine reports that as an
//! illegal conversion for the directive's character.

use crate::error::FormatError;

/// Upper bound on width and precision, per rendered token.
pub const MAX_FIELD: usize = 4096;

// ---------------------------------------------------------------------------
// Padding spec
// ---------------------------------------------------------------------------

/// Field width and precision for one directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddingSpec {
    /// Pad with zeros after the sign instead of leading spaces.
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl PaddingSpec {
    /// Parse a raw lexical spec (the characters between `%` and the
    /// conversion character).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        let len = bytes.len();
        let mut pos = 0;
        let mut spec = Self::default();

        // --- zero flag ---
        if pos < len && bytes[pos] == b'0' {
            spec.zero_pad = true;
            pos += 1;
        }

        // --- width ---
        let start = pos;
        while pos < len && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos > start {
            if bytes[start] == b'0' {
                // "00" repeats the flag.
                return None;
            }
            spec.width = Some(parse_decimal(&bytes[start..pos]));
        }

        // --- precision ---
        if pos < len && bytes[pos] == b'.' {
            pos += 1;
            let start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == start {
                return None;
            }
            spec.precision = Some(parse_decimal(&bytes[start..pos]));
        }

        // A second '.' or anything else left over.
        if pos != len {
            return None;
        }
        if spec.zero_pad && spec.width.is_none() {
            return None;
        }
        Some(spec)
    }

    /// Effective field width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width.unwrap_or(0).min(MAX_FIELD)
    }

    /// Effective precision, falling back to `default`.
    #[must_use]
    pub fn precision_or(&self, default: usize) -> usize {
        self.precision.unwrap_or(default).min(MAX_FIELD)
    }
}

fn parse_decimal(digits: &[u8]) -> usize {
    let mut result = 0_usize;
    for &d in digits {
        result = result
            .saturating_mul(10)
            .saturating_add((d - b'0') as usize);
    }
    result
}

// ---------------------------------------------------------------------------
// Conversion character
// ---------------------------------------------------------------------------

/// Letter case for hex output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    Lower,
    Upper,
}

impl HexCase {
    #[must_use]
    pub const fn conversion(self) -> char {
        match self {
            Self::Lower => 'x',
            Self::Upper => 'X',
        }
    }
}

/// A recognized conversion character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `b` / `B`; the flag selects upper case.
    Boolean { upper: bool },
    /// `d`
    Decimal,
    /// `f`
    Float,
    /// `s`
    Str,
    /// `x` / `X`
    Hex(HexCase),
}

impl Conversion {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'b' => Self::Boolean { upper: false },
            'B' => Self::Boolean { upper: true },
            'd' => Self::Decimal,
            'f' => Self::Float,
            's' => Self::Str,
            'x' => Self::Hex(HexCase::Lower),
            'X' => Self::Hex(HexCase::Upper),
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Boolean { upper: false } => 'b',
            Self::Boolean { upper: true } => 'B',
            Self::Decimal => 'd',
            Self::Float => 'f',
            Self::Str => 's',
            Self::Hex(case) => case.conversion(),
        }
    }

    /// Whether a nil argument is rendered (as nothing) instead of rejected.
    #[must_use]
    pub const fn accepts_nil(self) -> bool {
        matches!(self, Self::Str)
    }

    /// Whether the zero flag applies to this conversion.
    #[must_use]
    pub const fn accepts_zero_pad(self) -> bool {
        matches!(self, Self::Decimal | Self::Float | Self::Hex(_))
    }
}

/// Integer conversions take no precision.
pub(crate) fn ensure_no_precision(spec: &PaddingSpec, conversion: char) -> Result<(), FormatError> {
    if spec.precision.is_some() {
        return Err(FormatError::type_mismatch(conversion, "precision on integer"));
    }
    Ok(())
}
