//! # sprintf-core
//!
//! Safe Rust implementation of the runtime's `sprintf` builtin: a format
//! template with `%` directives plus an ordered list of dynamically-typed
//! arguments in, one formatted string (or one typed error) out.
//!
//! Supported conversions: `b`/`B` (boolean), `d` (integer), `f` (float),
//! `s` (canonical string of any value), `x`/`X` (hex, per byte for byte
//! sequences) and `%%`. An optional padding spec of digits and at most one
//! `.` sets the width and precision.
//!
//! Formatting is pure: no I/O, no shared state, safe to call from any
//! number of threads.

pub mod engine;
pub mod error;
pub mod hex;
pub mod render;
pub mod spec;
pub mod value;

pub use engine::sprintf;
pub use error::{ErrorKind, FormatError};
pub use hex::render_hex;
pub use spec::{Conversion, HexCase, PaddingSpec};
pub use value::{Value, ValueKind};
