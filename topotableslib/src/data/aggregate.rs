//! Parser attribute aggregation.
//!
//! Reduces every parser declaration to the two sets the documentation shows:
//! the attributes it reads and the attributes it guesses. Attributes every
//! format provides are left out so the tables only show what distinguishes
//! one format from another.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::manifest::{FormatName, ParserFixture};

/// Read and guessed attributes of one parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRecord {
    pub format: FormatName,
    /// `(expected - guessed) - mandatory`
    pub read: BTreeSet<String>,
    /// Guessed attributes, unfiltered
    pub guessed: BTreeSet<String>,
}

impl FormatRecord {
    pub fn from_fixture(fixture: &ParserFixture, mandatory: &BTreeSet<String>) -> Self {
        let read = fixture
            .expected
            .iter()
            .filter(|a| !fixture.guessed.contains(*a) && !mandatory.contains(*a))
            .cloned()
            .collect();

        FormatRecord {
            format: fixture.format.clone(),
            read,
            guessed: fixture.guessed.clone(),
        }
    }

    /// Every attribute this format provides, read or guessed.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.read.union(&self.guessed).map(String::as_str)
    }
}

/// Aggregate all parsers, preserving declaration order.
pub fn aggregate(parsers: &[ParserFixture], mandatory: &BTreeSet<String>) -> Vec<FormatRecord> {
    parsers
        .iter()
        .map(|p| FormatRecord::from_fixture(p, mandatory))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandatory(attrs: &[&str]) -> BTreeSet<String> {
        attrs.iter().map(|a| a.to_string()).collect()
    }

    fn set(attrs: &[&str]) -> BTreeSet<String> {
        mandatory(attrs)
    }

    #[test]
    fn test_mandatory_attributes_are_not_read() {
        let fixture = ParserFixture::new("CRD", ["ids", "names", "tempfactors"], []);
        let record = FormatRecord::from_fixture(&fixture, &mandatory(&["ids"]));
        assert_eq!(record.read, set(&["names", "tempfactors"]));
    }

    #[test]
    fn test_guessed_attributes_are_not_read() {
        let fixture = ParserFixture::new("GRO", ["names", "masses"], ["masses", "types"]);
        let record = FormatRecord::from_fixture(&fixture, &BTreeSet::new());
        assert_eq!(record.read, set(&["names"]));
        assert_eq!(record.guessed, set(&["masses", "types"]));
    }

    #[test]
    fn test_guessed_is_not_filtered_by_mandatory() {
        let fixture = ParserFixture::new("XYZ", ["names"], ["types", "masses"]);
        let record = FormatRecord::from_fixture(&fixture, &mandatory(&["types", "masses"]));
        assert_eq!(record.guessed, set(&["masses", "types"]));
    }

    #[test]
    fn test_attributes_is_union() {
        let fixture = ParserFixture::new("MOL2", ["charges", "bonds"], ["elements"]);
        let record = FormatRecord::from_fixture(&fixture, &BTreeSet::new());
        let attrs: Vec<&str> = record.attributes().collect();
        assert_eq!(attrs, vec!["bonds", "charges", "elements"]);
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let parsers = vec![
            ParserFixture::new("XYZ", ["names"], []),
            ParserFixture::new(&["DATA", "LAMMPS"][..], ["charges"], []),
            ParserFixture::new("CRD", ["names"], []),
        ];
        let records = aggregate(&parsers, &BTreeSet::new());
        let keys: Vec<&str> = records.iter().map(|r| r.format.key()).collect();
        assert_eq!(keys, vec!["XYZ", "DATA", "CRD"]);
        assert_eq!(records[1].format.label(), "DATA, LAMMPS");
    }
}
