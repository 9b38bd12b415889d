use crate::{model::ArmguardConfigV1, presets};
use armguard_domain::policy::{CheckPolicy, EffectiveConfig};
use armguard_types::explain::all_check_ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: ArmguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "strict".to_string());

    let Some(mut effective) = presets::preset(&profile) else {
        anyhow::bail!(
            "unknown profile: {profile} (expected one of: {})",
            presets::known_profiles().join(", ")
        );
    };

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!(
                "unknown check id in config: {check_id} (expected one of: {})",
                all_check_ids().join(", ")
            );
        }

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
    }

    // SKU table
    if cfg.cost.replace_default_skus {
        effective.oversized_skus.clear();
    }
    for (sku, recommendation) in cfg.cost.oversized_skus {
        if recommendation.trim().is_empty() {
            anyhow::bail!("empty recommendation for oversized sku: {sku}");
        }
        effective.oversized_skus.insert(sku, recommendation);
    }

    Ok(ResolvedConfig { effective })
}
