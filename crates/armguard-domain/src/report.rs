use armguard_types::{ArmguardData, Finding, Verdict, ids};

/// Per-check finding tallies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckCounts {
    pub naming: u32,
    pub security: u32,
    pub cost: u32,
}

impl CheckCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = CheckCounts::default();
        for f in findings {
            match f.check_id.as_str() {
                ids::CHECK_NAMING_ABBREVIATIONS => counts.naming += 1,
                ids::CHECK_SECURITY_HARDENING => counts.security += 1,
                ids::CHECK_COST_OVERSIZED_SKU => counts.cost += 1,
                _ => {}
            }
        }
        counts
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: ArmguardData,
    pub counts: CheckCounts,
}
