use armguard_domain::policy::{CheckPolicy, EffectiveConfig, OversizedSkus};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "security-only" => Some(security_only_profile()),
        _ => None,
    }
}

pub fn known_profiles() -> &'static [&'static str] {
    &["strict", "security-only"]
}

/// SKUs known to be oversized for non-production workloads.
pub fn default_oversized_skus() -> OversizedSkus {
    let mut m = BTreeMap::new();
    m.insert(
        "Standard_D4s_v3".to_string(),
        "Consider Standard_D2s_v3 for non-production".to_string(),
    );
    m.insert(
        "Standard_D8s_v3".to_string(),
        "Consider Standard_D4s_v3 for non-production".to_string(),
    );
    m.insert(
        "P1V2".to_string(),
        "Consider P1V1 for non-production app service plans".to_string(),
    );
    m
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        checks: default_checks(true),
        oversized_skus: default_oversized_skus(),
    }
}

fn security_only_profile() -> EffectiveConfig {
    let mut checks = default_checks(false);
    checks.insert(
        armguard_types::ids::CHECK_SECURITY_HARDENING.to_string(),
        CheckPolicy::enabled(),
    );
    EffectiveConfig {
        profile: "security-only".to_string(),
        checks,
        oversized_skus: default_oversized_skus(),
    }
}

fn default_checks(enabled: bool) -> BTreeMap<String, CheckPolicy> {
    use armguard_types::explain::all_check_ids;

    let policy = if enabled {
        CheckPolicy::enabled()
    } else {
        CheckPolicy::disabled()
    };
    all_check_ids()
        .iter()
        .map(|id| (id.to_string(), policy.clone()))
        .collect()
}
