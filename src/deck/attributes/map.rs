//! The ordered attribute map
//!
//! One structure for the whole pipeline: built from a box's attribute list, overridden by
//! call sites, read by layout and renderers. Overriding an existing key keeps its original
//! position so output stays stable.

use super::kind::AttributeKind;
use crate::deck::ast::{Attribute, AttributeValue};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeMap {
    kind: AttributeKind,
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeMap {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    /// Build from an attribute list; a repeated key keeps its last value
    pub fn from_attributes(kind: AttributeKind, attributes: &[Attribute]) -> Self {
        let mut map = Self::new(kind);
        map.apply(attributes);
        map
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn set(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.entries.insert(key.into(), value);
    }

    /// Override by key, in order
    pub fn apply(&mut self, attributes: &[Attribute]) {
        for attribute in attributes {
            self.set(attribute.key.clone(), attribute.value());
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when the key is present and not explicitly `false`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|value| value.as_flag().unwrap_or(true))
            .unwrap_or(false)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
