use crate::model::Resource;
use armguard_types::ResourceRef;
use serde_json::Value;

/// Report counters are `u32`; anything larger saturates rather than wrapping.
pub fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub fn resource_ref(index: usize, resource: &Resource) -> ResourceRef {
    ResourceRef {
        index: saturating_u32(index),
        name: resource.name.clone(),
        resource_type: resource.resource_type.clone(),
    }
}

/// Loose truthiness for JSON values: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
