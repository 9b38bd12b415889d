use std::collections::BTreeMap;

/// Known-oversized SKU name -> human-readable recommendation.
pub type OversizedSkus = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub checks: BTreeMap<String, CheckPolicy>,
    pub oversized_skus: OversizedSkus,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }

    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.check_policy(check_id).is_some()
    }
}
