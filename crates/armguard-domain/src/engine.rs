use crate::checks;
use crate::checks::utils::saturating_u32;
use crate::model::{AbbreviationMap, ResourceDocument};
use crate::policy::EffectiveConfig;
use crate::report::{CheckCounts, DomainReport};
use armguard_types::{ArmguardData, Finding, Verdict};

pub fn evaluate(
    doc: &ResourceDocument,
    abbreviations: &AbbreviationMap,
    cfg: &EffectiveConfig,
) -> DomainReport {
    let run = checks::run_all(doc, abbreviations, cfg);

    let verdict = compute_verdict(&run.findings);
    let counts = CheckCounts::from_findings(&run.findings);

    let data = ArmguardData {
        template: None,
        profile: cfg.profile.clone(),
        resources_scanned: saturating_u32(doc.len()),
        abbreviations_loaded: saturating_u32(abbreviations.len()),
        checks_run: run.checks_run.iter().map(|id| id.to_string()).collect(),
        findings_total: saturating_u32(run.findings.len()),
    };

    DomainReport {
        verdict,
        findings: run.findings,
        data,
        counts,
    }
}

// Every finding is an equal-weight failure.
fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}
