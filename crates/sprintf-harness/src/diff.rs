//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let rows = expected_lines.len().max(actual_lines.len());
    for i in 0..rows {
        let e = expected_lines.get(i);
        let a = actual_lines.get(i);
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{e:?}\n"));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{a:?}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("a", "a"), "[identical]");
    }

    #[test]
    fn whitespace_differences_are_visible() {
        let diff = render_diff("  12.57", " 12.57");
        assert!(diff.contains("-\"  12.57\""));
        assert!(diff.contains("+\" 12.57\""));
    }

    #[test]
    fn extra_lines_reported() {
        let diff = render_diff("a", "a\nb");
        assert!(diff.contains("@@ line 2 @@"));
        assert!(diff.contains("+\"b\""));
    }
}
