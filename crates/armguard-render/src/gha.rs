use crate::RenderableReport;

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={template},title={check_id}::[{code}] {message}`
///
/// ARM JSON carries no line information, so annotations point at the template file only.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let mut meta = Vec::new();
        if let Some(template) = &report.data.template {
            meta.push(format!("file={}", escape_property(template)));
        }
        meta.push(format!("title={}", escape_property(&f.check_id)));

        let mut message = format!("[{}] {}", f.code, f.message);
        if let Some(r) = &f.resource {
            message.push_str(&format!(" ({} '{}')", r.resource_type, r.name));
        }

        out.push(format!("::error {}::{}", meta.join(","), escape_data(&message)));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
