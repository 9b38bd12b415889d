//! Hardening rules for security-sensitive resource types.
//!
//! Rules live in a [`SecurityRegistry`] of `(type predicate -> rule)` pairs. A resource is
//! evaluated by the first rule whose predicate accepts its `type`; resources no rule accepts
//! produce nothing. New resource kinds are added with [`SecurityRegistry::with_rule`].

mod sql;
mod storage;

use crate::checks::utils::resource_ref;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::{Resource, ResourceDocument};
use armguard_types::{Finding, ids};
use serde_json::{Value, json};

pub use sql::sql_server_rule;
pub use storage::storage_account_rule;

/// A single hardening failure reported by a rule, before it is tied to a resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
    pub help: &'static str,
    /// Extra rule-specific payload merged into the finding data.
    pub data: Value,
}

#[derive(Clone, Copy, Debug)]
pub struct SecurityRule {
    /// Short label used in logs and finding data.
    pub kind: &'static str,
    pub applies_to: fn(&str) -> bool,
    pub evaluate: fn(&Resource) -> Vec<Violation>,
}

#[derive(Clone, Debug)]
pub struct SecurityRegistry {
    rules: Vec<SecurityRule>,
}

impl Default for SecurityRegistry {
    fn default() -> Self {
        Self::empty()
            .with_rule(storage_account_rule())
            .with_rule(sql_server_rule())
    }
}

impl SecurityRegistry {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Earlier rules take precedence when predicates overlap.
    pub fn with_rule(mut self, rule: SecurityRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[SecurityRule] {
        &self.rules
    }

    pub fn rule_for(&self, resource_type: &str) -> Option<&SecurityRule> {
        self.rules.iter().find(|r| (r.applies_to)(resource_type))
    }

    pub fn check(&self, doc: &ResourceDocument) -> Vec<Finding> {
        let mut out = Vec::new();

        for (index, resource) in doc.resources.iter().enumerate() {
            let Some(rule) = self.rule_for(&resource.resource_type) else {
                continue;
            };

            for violation in (rule.evaluate)(resource) {
                let mut data = json!({
                    "resource": resource.name,
                    "rule": rule.kind,
                    "type": resource.resource_type,
                });
                if let (Some(obj), Value::Object(extra)) = (data.as_object_mut(), violation.data) {
                    obj.extend(extra);
                }

                out.push(Finding {
                    check_id: ids::CHECK_SECURITY_HARDENING.to_string(),
                    code: violation.code.to_string(),
                    message: violation.message,
                    resource: Some(resource_ref(index, resource)),
                    help: Some(violation.help.to_string()),
                    fingerprint: Some(fingerprint_for_resource(
                        ids::CHECK_SECURITY_HARDENING,
                        violation.code,
                        index,
                        &resource.name,
                        None,
                    )),
                    data,
                });
            }
        }

        out
    }
}

/// Run the built-in hardening rules.
pub fn check(doc: &ResourceDocument) -> Vec<Finding> {
    SecurityRegistry::default().check(doc)
}
