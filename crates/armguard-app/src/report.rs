//! Report serialization, rendering adapters, and JSON Schema export.

use anyhow::Context;
use armguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableResource, RenderableVerdict,
};
use armguard_settings::ArmguardConfigV1;
use armguard_types::{ArmguardReport, Finding, Verdict};

/// Which document a JSON Schema is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// `armguard.report.v1`
    Report,
    /// `armguard.toml`
    Config,
}

pub fn serialize_report(report: &ArmguardReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &ArmguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            template: report.data.template.clone(),
            resources_scanned: report.data.resources_scanned,
            findings_total: report.data.findings_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        resource: f.resource.as_ref().map(|r| RenderableResource {
            name: r.name.clone(),
            resource_type: r.resource_type.clone(),
        }),
        help: f.help.clone(),
    }
}

pub fn render_text(report: &ArmguardReport) -> String {
    armguard_render::render_text(&to_renderable(report))
}

pub fn render_markdown(report: &ArmguardReport) -> String {
    armguard_render::render_markdown(&to_renderable(report))
}

/// GitHub Actions annotations, capped at `max` lines when given.
pub fn render_annotations(report: &ArmguardReport, max: Option<usize>) -> Vec<String> {
    let mut lines = armguard_render::render_github_annotations(&to_renderable(report));
    if let Some(max) = max {
        lines.truncate(max);
    }
    lines
}

/// Pretty-printed JSON Schema for the requested document.
pub fn json_schema(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Report => schemars::schema_for!(ArmguardReport),
        SchemaKind::Config => schemars::schema_for!(ArmguardConfigV1),
    };
    serde_json::to_string_pretty(&schema).context("serialize json schema")
}
