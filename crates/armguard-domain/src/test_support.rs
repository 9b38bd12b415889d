use crate::model::{AbbreviationMap, Resource, ResourceDocument};
use crate::policy::{CheckPolicy, EffectiveConfig, OversizedSkus};
use armguard_types::ids;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn resource(name: &str, resource_type: &str, properties: Value) -> Resource {
    Resource {
        name: name.to_string(),
        resource_type: resource_type.to_string(),
        properties: properties.as_object().cloned().unwrap_or_default(),
        sku: None,
    }
}

pub fn with_sku(mut resource: Resource, sku: Value) -> Resource {
    resource.sku = sku.as_object().cloned();
    resource
}

pub fn doc(resources: Vec<Resource>) -> ResourceDocument {
    ResourceDocument::new(resources)
}

pub fn abbreviations(pairs: &[(&str, &str)]) -> AbbreviationMap {
    pairs
        .iter()
        .map(|(a, f)| (a.to_string(), f.to_string()))
        .collect()
}

pub fn default_skus() -> OversizedSkus {
    [
        (
            "Standard_D4s_v3",
            "Consider Standard_D2s_v3 for non-production",
        ),
        (
            "Standard_D8s_v3",
            "Consider Standard_D4s_v3 for non-production",
        ),
        ("P1V2", "Consider P1V1 for non-production app service plans"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn default_config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for id in [
        ids::CHECK_NAMING_ABBREVIATIONS,
        ids::CHECK_SECURITY_HARDENING,
        ids::CHECK_COST_OVERSIZED_SKU,
    ] {
        checks.insert(id.to_string(), CheckPolicy::enabled());
    }
    EffectiveConfig {
        profile: "test".to_string(),
        checks,
        oversized_skus: default_skus(),
    }
}
