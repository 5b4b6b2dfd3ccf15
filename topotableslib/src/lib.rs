//! # topotableslib
//!
//! Builds the topology tables of the MDAnalysis documentation: which file
//! formats read or guess which topology attributes.
//!
//! ## Overview
//!
//! The input is a declarative manifest listing the topology attributes the
//! library registers and, for every topology parser, the attributes it is
//! expected to read and to guess. From it the library produces three RST
//! tables consumed by the Sphinx build:
//!
//! - **`formats/topology_parsers.txt`**: attributes read and guessed per format
//! - **`generated/topology/topologyattrs.txt`**: formats per attribute
//! - **`generated/topology/connectivityattrs.txt`**: formats per bond,
//!   angle, dihedral and improper
//!
//! ## Pipeline
//!
//! 1. **data**: manifest, attribute catalog, per-format read/guessed sets
//! 2. **support**: immutable attribute -> formats index
//! 3. **output**: table assembly and RST rendering
//!
//! ## Example
//!
//! ```rust
//! use topotableslib::{build_tables, Manifest};
//!
//! let manifest = Manifest::parse(r#"
//! mandatory = ["ids"]
//!
//! [[attribute]]
//! attrname = "charges"
//! singular = "charge"
//!
//! [[parser]]
//! format = ["DATA", "LAMMPS"]
//! expected = ["ids", "charges", "bonds"]
//! guessed = []
//! "#).unwrap();
//!
//! let tables = build_tables(&manifest, "");
//! assert_eq!(tables[0].rows[0], vec![":ref:`DATA, LAMMPS <DATA>`", "charges", ""]);
//! assert_eq!(tables[1].rows[0][3], ":ref:`DATA, LAMMPS <DATA>`");
//! assert_eq!(tables[2].rows[0][2], ":ref:`DATA, LAMMPS <DATA>`");
//! ```

pub mod data;
pub mod error;
pub mod generate;
pub mod options;
pub mod output;
pub mod support;

pub use data::{
    aggregate, AttributeCatalog, AttributeDescriptor, CatalogEntry, FormatName, FormatRecord,
    Manifest, ParserFixture, CONNECTIVITY_ATTRS, IGNORED_ATTRS,
};
pub use error::TopoTablesError;
pub use generate::{build_tables, generate, write_table, GenerateResult};
pub use options::GenerateOptions;
pub use output::{Table, TableSpec};
pub use support::AttributeSupportIndex;

/// Result type for topotableslib operations
pub type Result<T> = std::result::Result<T, TopoTablesError>;
