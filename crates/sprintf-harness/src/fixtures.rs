//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sprintf_core::{ErrorKind, FormatError};

use crate::error::HarnessError;

/// Prefix marking an expected failure in [`FixtureCase::expected`].
pub const ERROR_PREFIX: &str = "error:";

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behavior area exercised (e.g. `conversion/s`, `errors/null`).
    pub section: String,
    /// Format template.
    pub template: String,
    /// Arguments, in the encoding of [`crate::args`].
    pub args: serde_json::Value,
    /// Expected output, or `error:<ErrorKind>`.
    pub expected: String,
}

impl FixtureCase {
    /// Expected error kind, when the case expects a failure.
    #[must_use]
    pub fn expected_error(&self) -> Option<&str> {
        self.expected.strip_prefix(ERROR_PREFIX)
    }
}

/// A collection of fixture cases for one behavior family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

/// Load every `*.json` fixture set in `dir`, sorted by file name.
///
/// Any file that fails to parse fails the whole load.
pub fn load_fixture_dir(dir: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures {
            dir: dir.display().to_string(),
        });
    }

    paths
        .iter()
        .map(|path| {
            FixtureSet::from_file(path).map_err(|err| HarnessError::InvalidFixture {
                path: path.display().to_string(),
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Render a call outcome in fixture form.
#[must_use]
pub fn render_outcome(outcome: &Result<String, FormatError>) -> String {
    match outcome {
        Ok(out) => out.clone(),
        Err(err) => render_error(err.kind()),
    }
}

#[must_use]
pub fn render_error(kind: ErrorKind) -> String {
    format!("{ERROR_PREFIX}{kind}")
}
