//! Typed failures raised by the format engine.
//!
//! Every failure aborts the whole formatting call. The host runtime receives
//! the stable [`ErrorKind`] as the error reason and the `Display` text as the
//! human-readable detail.

use thiserror::Error;

/// Marker reported when a conversion meets the absent (nil) value.
pub const NIL_MARKER: &str = "()";

/// A formatting failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A directive needs an argument but the argument list is exhausted.
    #[error("not enough format arguments")]
    NotEnoughArguments,

    /// The argument cannot be rendered by the requested conversion, or the
    /// padding spec is malformed for it.
    #[error("illegal format conversion '{conversion} != {found}'")]
    IllegalFormatConversion { conversion: char, found: String },

    /// The character after the padding spec is not a known conversion.
    #[error("invalid format specifier '{specifier}'")]
    InvalidFormatSpecifier { specifier: char },

    /// The template ended inside a directive's padding spec.
    #[error("invalid format specifier: unterminated directive")]
    UnterminatedDirective,
}

impl FormatError {
    /// The argument was nil for a conversion that rejects nil.
    #[must_use]
    pub fn nil_argument(conversion: char) -> Self {
        Self::IllegalFormatConversion {
            conversion,
            found: NIL_MARKER.to_string(),
        }
    }

    /// The argument's runtime type does not fit the conversion.
    #[must_use]
    pub fn type_mismatch(conversion: char, type_name: &str) -> Self {
        Self::IllegalFormatConversion {
            conversion,
            found: type_name.to_string(),
        }
    }

    /// The padding spec failed validation.
    #[must_use]
    pub fn malformed_padding(conversion: char, raw: &str) -> Self {
        Self::IllegalFormatConversion {
            conversion,
            found: format!("malformed padding '{raw}'"),
        }
    }

    /// Stable error reason for the host boundary.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughArguments => ErrorKind::NotEnoughArguments,
            Self::IllegalFormatConversion { .. } => ErrorKind::IllegalFormatConversion,
            Self::InvalidFormatSpecifier { .. } | Self::UnterminatedDirective => {
                ErrorKind::InvalidFormatSpecifier
            }
        }
    }
}

/// Error reasons surfaced to the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotEnoughArguments,
    IllegalFormatConversion,
    InvalidFormatSpecifier,
}

impl ErrorKind {
    pub const ALL: [Self; 3] = [
        Self::NotEnoughArguments,
        Self::IllegalFormatConversion,
        Self::InvalidFormatSpecifier,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotEnoughArguments => "NotEnoughArguments",
            Self::IllegalFormatConversion => "IllegalFormatConversion",
            Self::InvalidFormatSpecifier => "InvalidFormatSpecifier",
        }
    }

    /// Case-insensitive lookup by reason name.
    #[must_use]
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_argument_message_names_marker() {
        let err = FormatError::nil_argument('d');
        assert_eq!(err.to_string(), "illegal format conversion 'd != ()'");
        assert_eq!(err.kind(), ErrorKind::IllegalFormatConversion);
    }

    #[test]
    fn unterminated_directive_reports_invalid_specifier() {
        assert_eq!(
            FormatError::UnterminatedDirective.kind(),
            ErrorKind::InvalidFormatSpecifier
        );
    }

    #[test]
    fn kind_lookup_ignores_case() {
        assert_eq!(
            ErrorKind::from_str_loose("notenougharguments"),
            Some(ErrorKind::NotEnoughArguments)
        );
        assert_eq!(ErrorKind::from_str_loose("Overflow"), None);
    }
}
