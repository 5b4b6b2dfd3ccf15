//! Manifest loading: the declarative description of attributes and parsers.
//!
//! A manifest replaces reflection over the library: attribute descriptors
//! are enumerated explicitly and every topology parser is listed with the
//! attributes it reads and guesses.
//!
//! ```toml
//! mandatory = ["ids", "masses"]
//!
//! [[attribute]]
//! attrname = "names"
//! singular = "name"
//!
//! [descriptions]
//! names = "atom names"
//!
//! [[parser]]
//! format = ["PDB", "ENT"]
//! expected = ["ids", "names"]
//! guessed = ["types", "masses"]
//! ```
//!
//! Every field except `descriptions` is required. A missing key means the
//! manifest drifted away from the library and is reported as an error.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TopoTablesError;
use crate::Result;

/// The MDAnalysis topology parsers, embedded at compile time.
pub const MDANALYSIS_MANIFEST: &str = include_str!("../../data/mdanalysis.toml");

/// A topology attribute as registered by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDescriptor {
    /// Group-level key, e.g. `names`
    pub attrname: String,
    /// Atom-level display name, e.g. `name`
    pub singular: String,
}

impl AttributeDescriptor {
    pub fn new(attrname: impl Into<String>, singular: impl Into<String>) -> Self {
        Self {
            attrname: attrname.into(),
            singular: singular.into(),
        }
    }
}

/// Format identifier of a parser: one name, or an ordered list of aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatName {
    Single(String),
    Aliases(Vec<String>),
}

impl FormatName {
    /// Canonical lookup key (the first alias).
    pub fn key(&self) -> &str {
        match self {
            FormatName::Single(name) => name,
            FormatName::Aliases(names) => names.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Visible label: every alias joined by `", "`.
    pub fn label(&self) -> String {
        match self {
            FormatName::Single(name) => name.clone(),
            FormatName::Aliases(names) => names.join(", "),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            FormatName::Single(name) => name.is_empty(),
            FormatName::Aliases(names) => names.is_empty() || names.iter().any(|n| n.is_empty()),
        }
    }
}

impl From<&str> for FormatName {
    fn from(name: &str) -> Self {
        FormatName::Single(name.to_string())
    }
}

impl From<&[&str]> for FormatName {
    fn from(names: &[&str]) -> Self {
        FormatName::Aliases(names.iter().map(|n| n.to_string()).collect())
    }
}

/// Attribute expectations of one topology parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserFixture {
    pub format: FormatName,
    /// Attributes the parser populates from file contents
    pub expected: BTreeSet<String>,
    /// Attributes the parser may infer when the file lacks them
    pub guessed: BTreeSet<String>,
}

impl ParserFixture {
    pub fn new<'a>(
        format: impl Into<FormatName>,
        expected: impl IntoIterator<Item = &'a str>,
        guessed: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            format: format.into(),
            expected: expected.into_iter().map(String::from).collect(),
            guessed: guessed.into_iter().map(String::from).collect(),
        }
    }
}

/// A complete manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Attributes present in every format
    pub mandatory: BTreeSet<String>,
    #[serde(rename = "attribute")]
    pub attributes: Vec<AttributeDescriptor>,
    /// Free-text descriptions keyed by attribute name
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
    #[serde(rename = "parser")]
    pub parsers: Vec<ParserFixture>,
}

impl Manifest {
    /// Parse and validate a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read, parse and validate a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TopoTablesError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded manifest");
        Self::parse(&text)
    }

    /// The built-in MDAnalysis manifest.
    pub fn builtin() -> Result<Self> {
        Self::parse(MDANALYSIS_MANIFEST)
    }

    /// Check the uniqueness invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for attr in &self.attributes {
            if !seen.insert(attr.attrname.as_str()) {
                return Err(TopoTablesError::DuplicateAttribute(attr.attrname.clone()));
            }
        }

        let mut keys = HashSet::new();
        for (index, parser) in self.parsers.iter().enumerate() {
            if parser.format.is_empty() {
                return Err(TopoTablesError::EmptyFormat { index });
            }
            if !keys.insert(parser.format.key()) {
                return Err(TopoTablesError::DuplicateFormat(
                    parser.format.key().to_string(),
                ));
            }
        }

        Ok(())
    }
}
