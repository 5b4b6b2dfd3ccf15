//! Attribute catalog: display names and descriptions per attribute key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::manifest::AttributeDescriptor;

/// Container and back-reference attributes. They are not physical
/// properties and never show up in the documentation.
pub const IGNORED_ATTRS: [&str; 7] = [
    "topologyattrs",
    "atomattrs",
    "residueattrs",
    "segmentattrs",
    "indices",
    "resindices",
    "segindices",
];

/// Connectivity kinds, documented in their own table in this order.
pub const CONNECTIVITY_ATTRS: [&str; 4] = ["bonds", "angles", "dihedrals", "impropers"];

/// Display data for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Atom-level name, e.g. `charge`
    pub singular: String,
    /// Free text; empty when the description table has no entry
    pub description: String,
}

/// Mapping `attrname -> (singular, description)`, iterated alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl AttributeCatalog {
    /// Build the catalog from the attribute registry and the description table.
    ///
    /// Ignored attributes are dropped. Attributes without a description get
    /// an empty one.
    pub fn build<'a>(
        descriptors: impl IntoIterator<Item = &'a AttributeDescriptor>,
        descriptions: &BTreeMap<String, String>,
    ) -> Self {
        let entries = descriptors
            .into_iter()
            .filter(|d| !IGNORED_ATTRS.contains(&d.attrname.as_str()))
            .map(|d| {
                let description = descriptions.get(&d.attrname).cloned().unwrap_or_default();
                (
                    d.attrname.clone(),
                    CatalogEntry {
                        singular: d.singular.clone(),
                        description,
                    },
                )
            })
            .collect();

        AttributeCatalog { entries }
    }

    pub fn get(&self, attrname: &str) -> Option<&CatalogEntry> {
        self.entries.get(attrname)
    }

    pub fn contains(&self, attrname: &str) -> bool {
        self.entries.contains_key(attrname)
    }

    /// Entries in alphabetical order of their key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
