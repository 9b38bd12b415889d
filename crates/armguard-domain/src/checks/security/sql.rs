use super::{SecurityRule, Violation};
use crate::model::Resource;
use armguard_types::ids;
use serde_json::json;

pub fn sql_server_rule() -> SecurityRule {
    SecurityRule {
        kind: "sql_server",
        applies_to: is_sql_server,
        evaluate,
    }
}

fn is_sql_server(resource_type: &str) -> bool {
    resource_type.contains(ids::TYPE_SQL_SERVERS)
}

fn evaluate(resource: &Resource) -> Vec<Violation> {
    // Exact, case-sensitive; absent or any other value passes.
    let public = resource
        .property(&["publicNetworkAccess"])
        .and_then(|v| v.as_str());
    if public != Some("Enabled") {
        return Vec::new();
    }

    vec![Violation {
        code: ids::CODE_SQL_PUBLIC_NETWORK_ACCESS,
        message: "SQL Server has public network access enabled".to_string(),
        help: "Set `publicNetworkAccess: 'Disabled'` and use a private endpoint.",
        data: json!({ "publicNetworkAccess": "Enabled" }),
    }]
}
