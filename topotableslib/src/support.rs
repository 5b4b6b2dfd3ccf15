//! Attribute support index: which formats provide which attribute.
//!
//! Built once from the aggregated format records and read-only afterwards,
//! so the tables that consume it can be assembled in any order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::data::FormatRecord;
use crate::output::xref::format_ref;

/// Mapping `attrname -> format cells`.
///
/// Values are the rendered cross-reference cells of the format table, so the
/// attribute tables link straight to the format documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSupportIndex {
    formats: BTreeMap<String, BTreeSet<String>>,
}

impl AttributeSupportIndex {
    /// Fold every read or guessed attribute of every record into the index.
    pub fn build(records: &[FormatRecord], xref_suffix: &str) -> Self {
        let mut formats: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            let cell = format_ref(&record.format, xref_suffix);
            for attr in record.attributes() {
                formats
                    .entry(attr.to_string())
                    .or_default()
                    .insert(cell.clone());
            }
        }
        AttributeSupportIndex { formats }
    }

    /// Formats supporting `attrname`, alphabetical. Unknown attributes have none.
    pub fn supported_formats(&self, attrname: &str) -> Vec<&str> {
        self.formats
            .get(attrname)
            .map(|cells| cells.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Attributes with at least one supporting format.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}
