//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report over one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Section | Status |\n");
        out.push_str("|------|---------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.section, status));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n", r.case_name));
                if let Some(message) = &r.message {
                    out.push_str(&format!("Error: {message}\n\n"));
                }
                if let Some(diff) = &r.diff {
                    out.push_str("```diff\n");
                    out.push_str(diff);
                    out.push_str("```\n");
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn report() -> ConformanceReport {
        let results = vec![
            VerificationResult {
                case_name: "pass_case".to_string(),
                section: "conversion/d".to_string(),
                passed: true,
                expected: "1".to_string(),
                actual: "1".to_string(),
                message: None,
                diff: None,
                latency_ns: 10,
            },
            VerificationResult {
                case_name: "fail_case".to_string(),
                section: "conversion/f".to_string(),
                passed: false,
                expected: "1.00".to_string(),
                actual: "1.0".to_string(),
                message: None,
                diff: Some("--- expected\n+++ actual\n".to_string()),
                latency_ns: 12,
            },
        ];
        ConformanceReport {
            title: "sprintf Conformance Report".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            summary: VerificationSummary::from_results(results),
        }
    }

    #[test]
    fn markdown_lists_cases_and_failures() {
        let md = report().to_markdown();
        assert!(md.starts_with("# sprintf Conformance Report"));
        assert!(md.contains("| pass_case | conversion/d | PASS |"));
        assert!(md.contains("| fail_case | conversion/f | FAIL |"));
        assert!(md.contains("### fail_case"));
        assert!(md.contains("```diff"));
    }

    #[test]
    fn json_carries_summary() {
        let parsed: serde_json::Value = serde_json::from_str(&report().to_json()).unwrap();
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["failed"], 1);
    }
}
