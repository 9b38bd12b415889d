use crate::error::TemplateError;
use armguard_domain::model::{Resource, ResourceDocument};
use serde_json::{Map, Value};

/// Parse compiled ARM JSON into a [`ResourceDocument`].
///
/// Lenient about content, strict about shape:
/// - the root must be an object; a missing `resources` key is an empty document
/// - `resources` may be an array, or an object keyed by symbolic name (languageVersion 2.0),
///   whose values are taken in declaration order
/// - non-object resource entries are skipped; unknown fields are ignored
/// - non-string `name`/`type` read as empty, non-object `properties` as empty
pub fn parse_document(text: &str) -> Result<ResourceDocument, TemplateError> {
    let root: Value = serde_json::from_str(text).map_err(TemplateError::InvalidJson)?;
    let Value::Object(root) = root else {
        return Err(TemplateError::Malformed("root is not a JSON object"));
    };

    let entries: Vec<&Value> = match root.get("resources") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(by_name)) => by_name.values().collect(),
        Some(_) => {
            return Err(TemplateError::Malformed(
                "`resources` is neither an array nor an object",
            ));
        }
    };

    let resources = entries
        .into_iter()
        .filter_map(Value::as_object)
        .map(parse_resource)
        .collect();

    Ok(ResourceDocument::new(resources))
}

fn parse_resource(obj: &Map<String, Value>) -> Resource {
    Resource {
        name: str_field(obj, "name"),
        resource_type: str_field(obj, "type"),
        properties: obj
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        sku: obj.get("sku").and_then(Value::as_object).cloned(),
    }
}

fn str_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
