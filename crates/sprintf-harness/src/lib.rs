//! Conformance testing harness for sprintf-core.
//!
//! This crate provides:
//! - Argument decoding: JSON arrays into runtime [`sprintf_core::Value`] slots
//! - Fixtures: JSON reference cases (template, args, expected output or error)
//! - Runner + verification: execute fixtures and summarize pass/fail
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured JSONL logging for verification runs

pub mod args;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet, load_fixture_dir};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::VerificationResult;
