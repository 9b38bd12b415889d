//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - naming matches exactly when abbreviation present and full term absent
//! - storage/sql/cost predicates
//! - idempotent, order-preserving aggregation

use crate::checks::{cost, naming, security};
use crate::engine::evaluate;
use crate::model::{AbbreviationMap, Resource, ResourceDocument};
use crate::test_support::{default_config, default_skus};
use armguard_types::ids;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,4}").unwrap()
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{0,16}").unwrap()
}

fn arb_resource_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Microsoft.Storage/storageAccounts".to_string()),
        Just("Microsoft.Sql/servers".to_string()),
        Just("Microsoft.Compute/virtualMachines".to_string()),
        Just("Microsoft.Web/serverfarms".to_string()),
        Just("Microsoft.KeyVault/vaults".to_string()),
    ]
}

fn arb_json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-2i64..3).prop_map(|n| json!(n)),
        prop_oneof![
            Just("Enabled".to_string()),
            Just("Disabled".to_string()),
            Just("enabled".to_string()),
            Just("true".to_string()),
            Just(String::new()),
        ]
        .prop_map(Value::String),
    ]
}

fn arb_properties() -> impl Strategy<Value = Map<String, Value>> {
    (
        prop::option::of(arb_json_leaf()),
        prop::option::of(arb_json_leaf()),
        prop::option::of(arb_json_leaf()),
    )
        .prop_map(|(https, blob, public)| {
            let mut m = Map::new();
            if let Some(v) = https {
                m.insert("supportsHttpsTrafficOnly".to_string(), v);
            }
            if let Some(v) = blob {
                m.insert(
                    "encryption".to_string(),
                    json!({"services": {"blob": {"enabled": v}}}),
                );
            }
            if let Some(v) = public {
                m.insert("publicNetworkAccess".to_string(), v);
            }
            m
        })
}

fn arb_sku() -> impl Strategy<Value = Option<Map<String, Value>>> {
    prop::option::of(
        prop_oneof![
            Just("Standard_D4s_v3"),
            Just("Standard_D8s_v3"),
            Just("P1V2"),
            Just("P1V1"),
            Just("Standard_D2s_v3"),
            Just("p1v2"),
        ]
        .prop_map(|name| {
            let mut m = Map::new();
            m.insert("name".to_string(), json!(name));
            m
        }),
    )
}

fn arb_resource() -> impl Strategy<Value = Resource> {
    (arb_name(), arb_resource_type(), arb_properties(), arb_sku()).prop_map(
        |(name, resource_type, properties, sku)| Resource {
            name,
            resource_type,
            properties,
            sku,
        },
    )
}

fn arb_document() -> impl Strategy<Value = ResourceDocument> {
    prop::collection::vec(arb_resource(), 0..8).prop_map(ResourceDocument::new)
}

fn arb_abbreviations() -> impl Strategy<Value = AbbreviationMap> {
    prop::collection::btree_map(arb_token(), arb_name(), 0..4)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn naming_flags_iff_abbreviation_without_full_term(
        name in arb_name(),
        abbr in arb_token(),
        full in arb_token(),
    ) {
        let d = ResourceDocument::new(vec![Resource {
            name: name.clone(),
            resource_type: "Microsoft.Web/sites".to_string(),
            ..Resource::default()
        }]);
        let map: AbbreviationMap = [(abbr.clone(), full.clone())].into_iter().collect();

        let out = naming::check(&d, &map);
        let expected = name.contains(&abbr) && !name.contains(&full);

        prop_assert_eq!(out.len(), usize::from(expected));
        if expected {
            prop_assert!(out[0].message.contains(&name));
            prop_assert!(out[0].message.contains(&full));
        }
    }

    #[test]
    fn empty_abbreviation_map_never_flags(doc in arb_document()) {
        prop_assert!(naming::check(&doc, &AbbreviationMap::new()).is_empty());
    }

    #[test]
    fn storage_https_issue_iff_not_literal_true(resource in arb_resource()) {
        let mut resource = resource;
        resource.resource_type = "Microsoft.Storage/storageAccounts".to_string();
        let https_true =
            resource.properties.get("supportsHttpsTrafficOnly") == Some(&Value::Bool(true));

        let out = security::check(&ResourceDocument::new(vec![resource]));
        let has_https_issue = out
            .iter()
            .any(|f| f.code == ids::CODE_STORAGE_HTTPS_NOT_ENFORCED);

        prop_assert_eq!(has_https_issue, !https_true);
    }

    #[test]
    fn sql_public_issue_iff_exactly_enabled(resource in arb_resource()) {
        let mut resource = resource;
        resource.resource_type = "Microsoft.Sql/servers".to_string();
        let enabled = resource.properties.get("publicNetworkAccess")
            == Some(&Value::String("Enabled".to_string()));

        let out = security::check(&ResourceDocument::new(vec![resource]));

        prop_assert_eq!(out.len(), usize::from(enabled));
    }

    #[test]
    fn cost_issue_iff_sku_in_table(resource in arb_resource()) {
        let skus = default_skus();
        let expected = resource.sku_name().is_some_and(|s| skus.contains_key(s));
        let resource_type = resource.resource_type.clone();

        let out = cost::check(&ResourceDocument::new(vec![resource]), &skus);

        prop_assert_eq!(out.len(), usize::from(expected));
        if expected {
            prop_assert!(out[0].message.contains(&resource_type));
        }
    }

    #[test]
    fn evaluation_is_idempotent(doc in arb_document(), abbr in arb_abbreviations()) {
        let cfg = default_config();
        let a = evaluate(&doc, &abbr, &cfg);
        let b = evaluate(&doc, &abbr, &cfg);

        prop_assert_eq!(
            serde_json::to_string(&a.findings).unwrap(),
            serde_json::to_string(&b.findings).unwrap()
        );
    }

    #[test]
    fn findings_are_naming_then_security_then_cost(
        doc in arb_document(),
        abbr in arb_abbreviations(),
    ) {
        let cfg = default_config();
        let report = evaluate(&doc, &abbr, &cfg);

        let mut expected = naming::check(&doc, &abbr);
        expected.extend(security::check(&doc));
        expected.extend(cost::check(&doc, &cfg.oversized_skus));

        prop_assert_eq!(&report.findings, &expected);

        // Within each check, resource indexes never go backwards.
        for check_id in [
            ids::CHECK_NAMING_ABBREVIATIONS,
            ids::CHECK_SECURITY_HARDENING,
            ids::CHECK_COST_OVERSIZED_SKU,
        ] {
            let indexes: Vec<u32> = report
                .findings
                .iter()
                .filter(|f| f.check_id == check_id)
                .filter_map(|f| f.resource.as_ref().map(|r| r.index))
                .collect();
            prop_assert!(indexes.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn every_finding_references_a_real_resource(
        doc in arb_document(),
        abbr in arb_abbreviations(),
    ) {
        let report = evaluate(&doc, &abbr, &default_config());
        for f in &report.findings {
            let r = f.resource.as_ref().expect("resource ref");
            let source = &doc.resources[r.index as usize];
            prop_assert_eq!(&r.name, &source.name);
            prop_assert_eq!(&r.resource_type, &source.resource_type);
        }
    }
}
