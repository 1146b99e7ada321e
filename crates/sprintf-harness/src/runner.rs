//! Test execution engine.

use std::time::Instant;

use sprintf_core::{ErrorKind, FormatError, sprintf};

use crate::args::args_from_json;
use crate::fixtures::{FixtureCase, FixtureSet, render_error, render_outcome};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;
use crate::diff;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

/// One executed case before comparison.
struct Execution {
    actual: String,
    error: Option<FormatError>,
    unsupported: Option<String>,
    latency_ns: u64,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| verify_case(case, execute_case(case)))
            .collect()
    }

    /// Run all fixtures, emitting one structured log line per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "fixture_set_start")
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "cases": fixture_set.cases.len(),
                })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let execution = execute_case(case);
            let kind = execution.error.as_ref().map(FormatError::kind);
            let result = verify_case(case, execution);

            let outcome = match (result.passed, kind) {
                (false, _) => Outcome::Fail,
                (true, Some(_)) => Outcome::Error,
                (true, None) => Outcome::Pass,
            };
            let level = if result.passed {
                LogLevel::Info
            } else {
                LogLevel::Warn
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_symbol("sprintf")
                .with_case(&result.case_name)
                .with_outcome(outcome)
                .with_latency_ns(result.latency_ns);
            if let Some(kind) = kind {
                entry = entry.with_error_kind(kind);
            }
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "template": case.template,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }
}

fn execute_case(case: &FixtureCase) -> Execution {
    let args = match args_from_json(&case.args) {
        Ok(args) => args,
        Err(err) => {
            return Execution {
                actual: format!("unsupported:{err}"),
                error: None,
                unsupported: Some(err.to_string()),
                latency_ns: 0,
            };
        }
    };

    let started = Instant::now();
    let outcome = sprintf(&case.template, &args);
    let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    Execution {
        actual: render_outcome(&outcome),
        error: outcome.err(),
        unsupported: None,
        latency_ns,
    }
}

fn verify_case(case: &FixtureCase, execution: Execution) -> VerificationResult {
    let expected = normalize_expected(case);
    let passed = execution.unsupported.is_none() && execution.actual == expected;
    let diff = (!passed).then(|| diff::render_diff(&expected, &execution.actual));
    let message = execution
        .unsupported
        .or_else(|| execution.error.map(|err| err.to_string()));

    VerificationResult {
        case_name: case.name.clone(),
        section: case.section.clone(),
        passed,
        expected,
        actual: execution.actual,
        message,
        diff,
        latency_ns: execution.latency_ns,
    }
}

/// Canonical spelling for expected error kinds.
fn normalize_expected(case: &FixtureCase) -> String {
    match case.expected_error().and_then(ErrorKind::from_str_loose) {
        Some(kind) => render_error(kind),
        None => case.expected.clone(),
    }
}
