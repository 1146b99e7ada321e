//! Harness-side failures (fixture I/O and argument decoding).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("arguments must be a JSON array, got {found}")]
    ArgsNotArray { found: String },
    #[error("unsupported argument encoding: {0}")]
    UnsupportedArgument(String),
    #[error("fixture {path}: {reason}")]
    InvalidFixture { path: String, reason: String },
    #[error("no fixture JSON files found in {dir}")]
    NoFixtures { dir: String },
}
