//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod abbreviations;
mod model;
mod presets;
mod resolve;

pub use abbreviations::parse_abbreviations_json;
pub use model::{ArmguardConfigV1, CheckConfig, CostConfig};
pub use presets::default_oversized_skus;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `armguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ArmguardConfigV1> {
    let cfg: ArmguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: ArmguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
