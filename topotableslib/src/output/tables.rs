//! The three documentation tables.
//!
//! All of them read the same immutable [`AttributeSupportIndex`], so they can
//! be built in any order.

use std::collections::BTreeSet;

use crate::data::{AttributeCatalog, CatalogEntry, FormatRecord, CONNECTIVITY_ATTRS};
use crate::support::AttributeSupportIndex;

use super::table::{comma_join, Table, TableSpec};
use super::xref::format_ref;

/// Formats and the attributes they read and guess.
pub const TOPOLOGY_PARSERS_FILE: &str = "formats/topology_parsers.txt";
/// Non-connectivity attributes and the formats supporting them.
pub const TOPOLOGY_ATTRS_FILE: &str = "generated/topology/topologyattrs.txt";
/// Bonds, angles, dihedrals and impropers with their formats.
pub const CONNECTIVITY_ATTRS_FILE: &str = "generated/topology/connectivityattrs.txt";

fn is_connectivity(attrname: &str) -> bool {
    CONNECTIVITY_ATTRS.contains(&attrname)
}

/// One row per parser, sorted by the rendered format cell.
///
/// Connectivity is documented in its own table and left out of the
/// "Attributes read" column.
pub fn topology_parsers_table(records: &[FormatRecord], xref_suffix: &str) -> Table {
    TableSpec::new(TOPOLOGY_PARSERS_FILE)
        .sorted(true)
        .column("Format", |r: &&FormatRecord| format_ref(&r.format, xref_suffix))
        .column("Attributes read", |r: &&FormatRecord| {
            comma_join(
                r.read
                    .iter()
                    .map(String::as_str)
                    .filter(|a| !is_connectivity(a)),
            )
        })
        .column("Attributes guessed", |r: &&FormatRecord| {
            comma_join(r.guessed.iter().map(String::as_str))
        })
        .build(records)
}

/// One row per catalog attribute that is neither mandatory nor connectivity,
/// in the catalog's attribute key order.
pub fn topology_attrs_table(
    catalog: &AttributeCatalog,
    mandatory: &BTreeSet<String>,
    index: &AttributeSupportIndex,
) -> Table {
    let input = catalog
        .iter()
        .filter(|(name, _)| !mandatory.contains(*name) && !is_connectivity(name));

    TableSpec::new(TOPOLOGY_ATTRS_FILE)
        .column("Atom", |(_, entry): &(&str, &CatalogEntry)| {
            entry.singular.clone()
        })
        .column("AtomGroup", |(name, _): &(&str, &CatalogEntry)| {
            name.to_string()
        })
        .column("Description", |(_, entry): &(&str, &CatalogEntry)| {
            entry.description.clone()
        })
        .column("Supported formats", |(name, _): &(&str, &CatalogEntry)| {
            comma_join(index.supported_formats(name))
        })
        .build(input)
}

/// Exactly one row per connectivity kind, in declared order.
pub fn connectivity_attrs_table(index: &AttributeSupportIndex) -> Table {
    TableSpec::new(CONNECTIVITY_ATTRS_FILE)
        .column("Atom", |kind: &&str| kind.to_string())
        .column("AtomGroup", |kind: &&str| kind.to_string())
        .column("Supported formats", |kind: &&str| {
            comma_join(index.supported_formats(kind))
        })
        .build(CONNECTIVITY_ATTRS)
}
