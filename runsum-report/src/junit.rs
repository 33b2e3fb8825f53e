use std::fmt::Write as _;

use crate::humanize::fmt_plain;
use crate::summary::Summary;

const DEFAULT_SUITE_NAME: &str = "k6 thresholds";
const DEFAULT_CLASSNAME: &str = "Unnamed folder";

/// JUnit-only configuration; both fields fall back to the compatibility
/// defaults expected by report-ingesting CI systems.
#[derive(Debug, Clone, Default)]
pub struct JUnitOptions {
    /// `<testsuite>` display name.
    pub name: Option<String>,
    /// `classname` attribute stamped on every testcase.
    pub classname: Option<String>,
}

/// Serialize per-metric threshold results as a JUnit XML document: one
/// testcase per threshold expression, a nested `<failure>` for each not-ok
/// expression, and matching totals on `<testsuites>` and `<testsuite>`.
pub fn junit_report(summary: &Summary, options: &JUnitOptions) -> String {
    let suite_name = options
        .name
        .as_deref()
        .map_or_else(|| DEFAULT_SUITE_NAME.to_string(), xml_escape);
    let classname = options
        .classname
        .as_deref()
        .map_or_else(|| DEFAULT_CLASSNAME.to_string(), xml_escape);

    let mut cases = Vec::new();
    let mut failures = 0usize;

    for (metric_name, metric) in &summary.metrics {
        for (expression, threshold) in &metric.thresholds {
            let case_name = format!("{} - {}", xml_escape(metric_name), xml_escape(expression));
            if threshold.ok {
                cases.push(format!(
                    r#"<testcase name="{case_name}" classname="{classname}" />"#
                ));
            } else {
                failures += 1;
                let observed = threshold
                    .values
                    .iter()
                    .map(|(key, value)| format!("{key} value: {}", fmt_plain(*value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let message = xml_escape(&format!(
                    "{} threshold failed: {observed}",
                    metric.kind
                ));
                cases.push(format!(
                    r#"<testcase name="{case_name}" classname="{classname}"><failure message="{message}" /></testcase>"#
                ));
            }
        }
    }

    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    let _ = writeln!(
        out,
        r#"<testsuites tests="{}" failures="{failures}">"#,
        cases.len()
    );
    let _ = writeln!(
        out,
        r#"  <testsuite name="{suite_name}" tests="{}" failures="{failures}">"#,
        cases.len()
    );
    for case in &cases {
        let _ = writeln!(out, "    {case}");
    }
    out.push_str("  </testsuite>\n</testsuites>\n");
    out
}

/// The five XML-special characters; nothing else is rewritten.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
