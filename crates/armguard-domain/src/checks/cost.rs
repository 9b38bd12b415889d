use crate::checks::utils::resource_ref;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::ResourceDocument;
use crate::policy::OversizedSkus;
use armguard_types::{Finding, ids};
use serde_json::json;

/// Flag resources whose `sku.name` exactly matches a known-oversized SKU.
pub fn check(doc: &ResourceDocument, oversized_skus: &OversizedSkus) -> Vec<Finding> {
    let mut out = Vec::new();

    for (index, resource) in doc.resources.iter().enumerate() {
        let Some(sku) = resource.sku_name() else { continue };
        let Some(recommendation) = oversized_skus.get(sku) else { continue };

        out.push(Finding {
            check_id: ids::CHECK_COST_OVERSIZED_SKU.to_string(),
            code: ids::CODE_OVERSIZED_SKU.to_string(),
            message: format!("Resource {}: {}", resource.resource_type, recommendation),
            resource: Some(resource_ref(index, resource)),
            help: Some(format!(
                "SKU '{sku}' is oversized for non-production workloads."
            )),
            fingerprint: Some(fingerprint_for_resource(
                ids::CHECK_COST_OVERSIZED_SKU,
                ids::CODE_OVERSIZED_SKU,
                index,
                &resource.name,
                Some(sku),
            )),
            data: json!({
                "recommendation": recommendation,
                "resource": resource.name,
                "sku": sku,
                "type": resource.resource_type,
            }),
        });
    }

    out
}
