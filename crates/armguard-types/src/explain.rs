//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after Bicep examples.
    pub examples: ExamplePair,
}

/// Before and after template examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Template that would trigger a finding.
    pub before: &'static str,
    /// Template that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_NAMING_ABBREVIATIONS => Some(explain_naming_abbreviations()),
        ids::CHECK_SECURITY_HARDENING => Some(explain_security_hardening()),
        ids::CHECK_COST_OVERSIZED_SKU => Some(explain_cost_oversized_sku()),

        // Codes
        ids::CODE_ABBREVIATION_WITHOUT_FULL_TERM => Some(explain_abbreviation_without_full_term()),
        ids::CODE_STORAGE_HTTPS_NOT_ENFORCED => Some(explain_storage_https_not_enforced()),
        ids::CODE_STORAGE_BLOB_ENCRYPTION_DISABLED => {
            Some(explain_storage_blob_encryption_disabled())
        }
        ids::CODE_SQL_PUBLIC_NETWORK_ACCESS => Some(explain_sql_public_network_access()),
        ids::CODE_OVERSIZED_SKU => Some(explain_oversized_sku()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_NAMING_ABBREVIATIONS,
        ids::CHECK_SECURITY_HARDENING,
        ids::CHECK_COST_OVERSIZED_SKU,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ABBREVIATION_WITHOUT_FULL_TERM,
        ids::CODE_STORAGE_HTTPS_NOT_ENFORCED,
        ids::CODE_STORAGE_BLOB_ENCRYPTION_DISABLED,
        ids::CODE_SQL_PUBLIC_NETWORK_ACCESS,
        ids::CODE_OVERSIZED_SKU,
    ]
}

// --- Check-level explanations ---

fn explain_naming_abbreviations() -> Explanation {
    Explanation {
        title: "Naming Abbreviations",
        description: "\
Flags resource names that contain a banned abbreviation without also containing
the full term it stands for.

Abbreviations come from `abbreviations.json`, a JSON object mapping each
disallowed abbreviation to its required full term. Matching is a plain,
case-sensitive substring test: an abbreviation inside a longer token still
matches. Without an abbreviations file this check reports nothing.",
        remediation: "\
Spell out the full term in the resource name, or include the full term
alongside the abbreviation.",
        examples: ExamplePair {
            before: r#"// abbreviations.json: { "stg": "storage" }
resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {
  name: 'appstg01'
}"#,
            after: r#"resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {
  name: 'appstorage01'
}"#,
        },
    }
}

fn explain_security_hardening() -> Explanation {
    Explanation {
        title: "Security Hardening Defaults",
        description: "\
Checks security-sensitive resource types against hardening defaults:

- Storage accounts must set `supportsHttpsTrafficOnly: true`
- Storage accounts must enable blob encryption
  (`encryption.services.blob.enabled`)
- SQL servers must not set `publicNetworkAccess: 'Enabled'`

Missing properties are treated as not configured, which fails the HTTPS and
encryption rules and passes the SQL rule.",
        remediation: "\
Set the hardening properties explicitly in the template. See the individual
codes (`storage_https_not_enforced`, `storage_blob_encryption_disabled`,
`sql_public_network_access`) for details.",
        examples: ExamplePair {
            before: r#"resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {
  name: 'appstorage'
  properties: {}
}"#,
            after: r#"resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {
  name: 'appstorage'
  properties: {
    supportsHttpsTrafficOnly: true
    encryption: {
      services: {
        blob: { enabled: true }
      }
    }
  }
}"#,
        },
    }
}

fn explain_cost_oversized_sku() -> Explanation {
    Explanation {
        title: "Oversized SKUs",
        description: "\
Flags resources provisioned with a SKU that is known to be oversized for
non-production workloads.

This is a whitelist of known-bad SKU names, matched exactly against `sku.name`.
Unknown SKUs and resources without a SKU are never flagged.",
        remediation: "\
Pick the smaller SKU named in the recommendation, or extend the table in
`armguard.toml` under `[cost.oversized_skus]` if the default is wrong for you.",
        examples: ExamplePair {
            before: r#"resource plan 'Microsoft.Web/serverfarms@2022-09-01' = {
  name: 'app-plan'
  sku: { name: 'P1V2' }
}"#,
            after: r#"resource plan 'Microsoft.Web/serverfarms@2022-09-01' = {
  name: 'app-plan'
  sku: { name: 'P1V1' }
}"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_abbreviation_without_full_term() -> Explanation {
    let mut exp = explain_naming_abbreviations();
    exp.title = "Abbreviation Without Full Term";
    exp
}

fn explain_storage_https_not_enforced() -> Explanation {
    Explanation {
        title: "Storage Account HTTPS Not Enforced",
        description: "\
The storage account does not set `supportsHttpsTrafficOnly` to `true`.

Anything other than a literal `true` fails, including a missing property or a
string such as `'true'`.",
        remediation: "\
Set `supportsHttpsTrafficOnly: true` in the storage account properties.",
        examples: ExamplePair {
            before: r#"properties: {
  supportsHttpsTrafficOnly: false
}"#,
            after: r#"properties: {
  supportsHttpsTrafficOnly: true
}"#,
        },
    }
}

fn explain_storage_blob_encryption_disabled() -> Explanation {
    Explanation {
        title: "Storage Account Blob Encryption Disabled",
        description: "\
The storage account does not enable blob encryption at
`properties.encryption.services.blob.enabled`.

A missing `encryption`, `services`, or `blob` object counts as disabled.",
        remediation: "\
Declare the full encryption block with `enabled: true` for the blob service.",
        examples: ExamplePair {
            before: r#"properties: {
  supportsHttpsTrafficOnly: true
}"#,
            after: r#"properties: {
  supportsHttpsTrafficOnly: true
  encryption: {
    services: {
      blob: { enabled: true }
    }
  }
}"#,
        },
    }
}

fn explain_sql_public_network_access() -> Explanation {
    Explanation {
        title: "SQL Server Public Network Access",
        description: "\
The SQL server sets `publicNetworkAccess` to exactly `'Enabled'`, exposing it to
the public internet.

Any other value, including a missing property, passes.",
        remediation: "\
Set `publicNetworkAccess: 'Disabled'` and reach the server through a private
endpoint.",
        examples: ExamplePair {
            before: r#"resource sql 'Microsoft.Sql/servers@2022-05-01-preview' = {
  name: 'app-sql'
  properties: { publicNetworkAccess: 'Enabled' }
}"#,
            after: r#"resource sql 'Microsoft.Sql/servers@2022-05-01-preview' = {
  name: 'app-sql'
  properties: { publicNetworkAccess: 'Disabled' }
}"#,
        },
    }
}

fn explain_oversized_sku() -> Explanation {
    let mut exp = explain_cost_oversized_sku();
    exp.title = "Oversized SKU";
    exp
}
