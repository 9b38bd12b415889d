use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Banned abbreviation -> required full term.
///
/// A `BTreeMap` so that checks iterate in a stable order across runs.
pub type AbbreviationMap = BTreeMap<String, String>;

/// Compiled template: the ordered list of declared resources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceDocument {
    pub resources: Vec<Resource>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    pub name: String,
    /// Dotted namespace/kind, e.g. `Microsoft.Storage/storageAccounts`.
    pub resource_type: String,
    pub properties: Map<String, Value>,
    pub sku: Option<Map<String, Value>>,
}

impl Resource {
    /// Walk `properties` along `path`.
    ///
    /// A missing or non-object intermediate yields `None`; "not set" is never an error.
    pub fn property(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.properties.get(*first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    pub fn sku_name(&self) -> Option<&str> {
        self.sku.as_ref()?.get("name")?.as_str()
    }
}

impl ResourceDocument {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
