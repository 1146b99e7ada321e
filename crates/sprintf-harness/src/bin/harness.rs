//! CLI entrypoint for the sprintf conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sprintf_harness::structured_log::{LogEmitter, LogLevel, now_utc, validate_log_file};

/// Conformance tooling for sprintf-core.
#[derive(Debug, Parser)]
#[command(name = "sprintf-harness")]
#[command(about = "Conformance testing harness for sprintf-core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format one template and print the result.
    Format {
        /// Format template.
        #[arg(long)]
        template: String,
        /// Arguments as a JSON array (see the harness argument encoding).
        #[arg(long, default_value = "[]")]
        args: String,
    },
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long, default_value = "tests/conformance/fixtures")]
        fixture: PathBuf,
        /// Output report path (markdown; a JSON twin is written next to it).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Run identifier used in trace ids.
        #[arg(long, default_value = "local")]
        run_id: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Format { template, args } => {
            let json: serde_json::Value = serde_json::from_str(&args)?;
            let args = sprintf_harness::args::args_from_json(&json)?;
            match sprintf_core::sprintf(&template, &args) {
                Ok(out) => println!("{out}"),
                Err(err) => {
                    return Err(format!("{}: {err}", err.kind()).into());
                }
            }
        }
        Command::Verify {
            fixture,
            report,
            log,
            run_id,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = sprintf_harness::load_fixture_dir(&fixture)?;

            let mut emitter = match &log {
                Some(path) => LogEmitter::to_file(path, "sprintf", &run_id)?,
                None => LogEmitter::to_buffer("sprintf", &run_id),
            };
            emitter.emit(LogLevel::Info, "verify_start")?;

            let runner = sprintf_harness::TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for set in &fixture_sets {
                results.extend(runner.run_logged(set, &mut emitter)?);
            }

            let summary = sprintf_harness::verify::VerificationSummary::from_results(results);
            let report_doc = sprintf_harness::ConformanceReport {
                title: String::from("sprintf Conformance Report"),
                timestamp: now_utc(),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            let level = if report_doc.summary.all_passed() {
                LogLevel::Info
            } else {
                LogLevel::Error
            };
            emitter.emit(level, "verify_complete")?;
            emitter.flush()?;

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("Validated {lines} lines, {} errors", errors.len());
            if !errors.is_empty() {
                return Err(format!("{} invalid log lines", errors.len()).into());
            }
        }
    }

    Ok(())
}
