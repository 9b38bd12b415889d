use super::{SecurityRule, Violation};
use crate::checks::utils::is_truthy;
use crate::model::Resource;
use armguard_types::ids;
use serde_json::{Value, json};

pub fn storage_account_rule() -> SecurityRule {
    SecurityRule {
        kind: "storage_account",
        applies_to: is_storage_account,
        evaluate,
    }
}

fn is_storage_account(resource_type: &str) -> bool {
    resource_type.contains(ids::TYPE_STORAGE_ACCOUNTS)
}

fn evaluate(resource: &Resource) -> Vec<Violation> {
    let mut out = Vec::new();

    // Only a literal JSON `true` passes; "true" or 1 do not.
    let https = resource.property(&["supportsHttpsTrafficOnly"]);
    if https != Some(&Value::Bool(true)) {
        out.push(Violation {
            code: ids::CODE_STORAGE_HTTPS_NOT_ENFORCED,
            message: "Storage account should enforce HTTPS".to_string(),
            help: "Set `supportsHttpsTrafficOnly: true`.",
            data: json!({ "supportsHttpsTrafficOnly": https.cloned().unwrap_or(Value::Null) }),
        });
    }

    let blob = resource.property(&["encryption", "services", "blob", "enabled"]);
    if !is_truthy(blob) {
        out.push(Violation {
            code: ids::CODE_STORAGE_BLOB_ENCRYPTION_DISABLED,
            message: "Storage account blob encryption not enabled".to_string(),
            help: "Set `encryption.services.blob.enabled: true`.",
            data: json!({ "blobEncryptionEnabled": blob.cloned().unwrap_or(Value::Null) }),
        });
    }

    out
}
