use crate::checks::utils::resource_ref;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::{AbbreviationMap, ResourceDocument};
use armguard_types::{Finding, ids};
use serde_json::json;

/// Flag resource names that contain a banned abbreviation but not its full term.
///
/// Matching is plain case-sensitive substring containment with no word boundaries,
/// so `"stg"` also matches inside `"teststgx"`.
pub fn check(doc: &ResourceDocument, abbreviations: &AbbreviationMap) -> Vec<Finding> {
    let mut out = Vec::new();

    for (index, resource) in doc.resources.iter().enumerate() {
        let name = resource.name.as_str();
        for (abbr, full) in abbreviations {
            if !(name.contains(abbr.as_str()) && !name.contains(full.as_str())) {
                continue;
            }

            out.push(Finding {
                check_id: ids::CHECK_NAMING_ABBREVIATIONS.to_string(),
                code: ids::CODE_ABBREVIATION_WITHOUT_FULL_TERM.to_string(),
                message: format!("Resource '{name}': Use '{full}' instead of '{abbr}'"),
                resource: Some(resource_ref(index, resource)),
                help: Some(format!("Rename the resource to spell out '{full}'.")),
                fingerprint: Some(fingerprint_for_resource(
                    ids::CHECK_NAMING_ABBREVIATIONS,
                    ids::CODE_ABBREVIATION_WITHOUT_FULL_TERM,
                    index,
                    name,
                    Some(abbr),
                )),
                data: json!({
                    "abbreviation": abbr,
                    "full_term": full,
                    "resource": name,
                }),
            });
        }
    }

    out
}
