use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a resource finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - resource index (position in the document)
/// - resource name
/// - detail (the abbreviation or SKU involved, if any)
pub fn fingerprint_for_resource(
    check_id: &str,
    code: &str,
    index: usize,
    resource_name: &str,
    detail: Option<&str>,
) -> String {
    let index = index.to_string();
    let mut parts = vec![check_id, code, index.as_str(), resource_name];
    if let Some(d) = detail {
        parts.push(d);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
