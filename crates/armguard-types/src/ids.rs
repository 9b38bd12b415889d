//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_NAMING_ABBREVIATIONS: &str = "naming.abbreviations";
pub const CHECK_SECURITY_HARDENING: &str = "security.hardening";
pub const CHECK_COST_OVERSIZED_SKU: &str = "cost.oversized_sku";

// Codes: naming.abbreviations
pub const CODE_ABBREVIATION_WITHOUT_FULL_TERM: &str = "abbreviation_without_full_term";

// Codes: security.hardening
pub const CODE_STORAGE_HTTPS_NOT_ENFORCED: &str = "storage_https_not_enforced";
pub const CODE_STORAGE_BLOB_ENCRYPTION_DISABLED: &str = "storage_blob_encryption_disabled";
pub const CODE_SQL_PUBLIC_NETWORK_ACCESS: &str = "sql_public_network_access";

// Codes: cost.oversized_sku
pub const CODE_OVERSIZED_SKU: &str = "oversized_sku";

// Resource type markers matched by the security rules.
pub const TYPE_STORAGE_ACCOUNTS: &str = "Microsoft.Storage/storageAccounts";
pub const TYPE_SQL_SERVERS: &str = "Microsoft.Sql/servers";
