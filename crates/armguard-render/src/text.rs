use crate::RenderableReport;

pub const VIOLATIONS_HEADER: &str = "❌ Compliance Issues Found:";
pub const CLEAN_MARKER: &str = "✅ All compliance checks passed!";

/// Terminal output: a numbered list of messages, or the success marker.
pub fn render_text(report: &RenderableReport) -> String {
    if report.findings.is_empty() {
        return format!("{CLEAN_MARKER}\n");
    }

    let mut out = String::new();
    out.push_str(VIOLATIONS_HEADER);
    out.push('\n');
    for (i, f) in report.findings.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, f.message));
    }
    out
}
