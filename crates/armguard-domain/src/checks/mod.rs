use crate::model::{AbbreviationMap, ResourceDocument};
use crate::policy::EffectiveConfig;
use armguard_types::{Finding, ids};

pub mod cost;
pub mod naming;
pub mod security;
pub(crate) mod utils;


/// Findings from every enabled check plus the IDs of the checks that ran, in run order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckRun {
    pub checks_run: Vec<&'static str>,
    pub findings: Vec<Finding>,
}

pub fn run_all(
    doc: &ResourceDocument,
    abbreviations: &AbbreviationMap,
    cfg: &EffectiveConfig,
) -> CheckRun {
    let mut checks_run = Vec::new();

    let naming = if cfg.is_enabled(ids::CHECK_NAMING_ABBREVIATIONS) {
        checks_run.push(ids::CHECK_NAMING_ABBREVIATIONS);
        naming::check(doc, abbreviations)
    } else {
        Vec::new()
    };

    let security = if cfg.is_enabled(ids::CHECK_SECURITY_HARDENING) {
        checks_run.push(ids::CHECK_SECURITY_HARDENING);
        security::check(doc)
    } else {
        Vec::new()
    };

    let cost = if cfg.is_enabled(ids::CHECK_COST_OVERSIZED_SKU) {
        checks_run.push(ids::CHECK_COST_OVERSIZED_SKU);
        cost::check(doc, &cfg.oversized_skus)
    } else {
        Vec::new()
    };

    CheckRun {
        checks_run,
        findings: aggregate(naming, security, cost),
    }
}

/// Concatenate per-check findings: naming, then security, then cost.
///
/// No dedup and no reordering; each input keeps its resource order.
pub fn aggregate(naming: Vec<Finding>, security: Vec<Finding>, cost: Vec<Finding>) -> Vec<Finding> {
    let mut out = Vec::with_capacity(naming.len() + security.len() + cost.len());
    out.extend(naming);
    out.extend(security);
    out.extend(cost);
    out
}
