use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Armguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!("- Verdict: **{}**\n", verdict));
    if let Some(template) = &report.data.template {
        out.push_str(&format!("- Template: `{}`\n", template));
    }
    out.push_str(&format!(
        "- Resources scanned: {}\n- Findings: {}\n\n",
        report.data.resources_scanned, report.data.findings_total
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for (i, f) in report.findings.iter().enumerate() {
        match &f.resource {
            Some(r) => out.push_str(&format!(
                "{}. `{}` / `{}`: {} (`{}` `{}`)\n",
                i + 1,
                f.check_id,
                f.code,
                f.message,
                r.resource_type,
                r.name
            )),
            None => out.push_str(&format!(
                "{}. `{}` / `{}`: {}\n",
                i + 1,
                f.check_id,
                f.code,
                f.message
            )),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("   - help: {}\n", help));
        }
    }

    out
}
