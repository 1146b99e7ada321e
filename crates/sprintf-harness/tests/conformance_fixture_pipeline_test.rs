//! Integration test: conformance fixture pipeline.
//!
//! Validates that:
//! 1. Every fixture file under tests/conformance/fixtures parses.
//! 2. Case names are unique within a file and expected errors name real kinds.
//! 3. The engine passes every fixture case.
//! 4. A logged run produces a JSONL file that validates against the log schema.
//! 5. Reports render from the run.
//!
//! Run: cargo test -p sprintf-harness --test conformance_fixture_pipeline_test

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use sprintf_core::ErrorKind;
use sprintf_harness::structured_log::{LogEmitter, now_utc, validate_log_file};
use sprintf_harness::verify::VerificationSummary;
use sprintf_harness::{ConformanceReport, FixtureSet, TestRunner, load_fixture_dir};

fn workspace_root() -> PathBuf {
    let manifest = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn load_fixture_sets() -> Vec<FixtureSet> {
    let dir = workspace_root().join("tests/conformance/fixtures");
    load_fixture_dir(&dir).unwrap_or_else(|err| panic!("{} should load: {err}", dir.display()))
}

#[test]
fn fixtures_are_well_formed() {
    for set in load_fixture_sets() {
        assert_eq!(set.version, "v1", "{}: unexpected version", set.family);
        let mut names = HashSet::new();
        for case in &set.cases {
            assert!(names.insert(&case.name), "duplicate case name {}", case.name);
            assert!(case.args.is_array(), "{}: args must be an array", case.name);
            if let Some(kind) = case.expected_error() {
                assert!(
                    ErrorKind::from_str_loose(kind).is_some(),
                    "{}: unknown error kind {kind}",
                    case.name
                );
            }
        }
    }
}

#[test]
fn engine_passes_all_fixtures() {
    let runner = TestRunner::new("fixture-pipeline");
    for set in load_fixture_sets() {
        let results = runner.run(&set);
        let failures: Vec<String> = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| {
                format!(
                    "{} ({}): expected {:?}, got {:?}",
                    r.case_name, r.section, r.expected, r.actual
                )
            })
            .collect();
        assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
    }
}

#[test]
fn logged_run_produces_valid_jsonl() {
    let log_path = std::env::temp_dir().join(format!(
        "sprintf_fixture_pipeline_{}.jsonl",
        std::process::id()
    ));
    let mut emitter = LogEmitter::to_file(&log_path, "sprintf", "pipeline").unwrap();
    let runner = TestRunner::new("fixture-pipeline");
    let mut results = Vec::new();
    for set in load_fixture_sets() {
        results.extend(runner.run_logged(&set, &mut emitter).unwrap());
    }
    emitter.flush().unwrap();
    drop(emitter);

    let (lines, errors) = validate_log_file(&log_path).unwrap();
    let _ = std::fs::remove_file(&log_path);
    assert!(errors.is_empty(), "log errors: {:?}", errors);
    // One start line per set plus one line per case.
    assert!(lines > results.len());

    let report = ConformanceReport {
        title: String::from("sprintf Conformance Report"),
        timestamp: now_utc(),
        summary: VerificationSummary::from_results(results),
    };
    assert!(report.summary.all_passed());
    let md = report.to_markdown();
    assert!(md.contains(&report.timestamp));
    assert!(!md.contains("SystemTime"));
    assert_eq!(&report.timestamp[4..5], "-");
    assert!(report.timestamp.ends_with('Z'));
    assert!(md.contains("| percent_escape | scanner/percent | PASS |"));
    assert!(!md.contains("## Failures"));
}
