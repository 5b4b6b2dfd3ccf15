//! Data collection: load the manifest and derive the catalog and format records.
//!
//! This module handles the first stage of the pipeline:
//!
//! - **Manifest**: declarative attribute registry and parser expectations
//! - **Catalog**: `attrname -> (singular, description)`
//! - **Aggregation**: read/guessed attribute sets per parser
//!
//! ## Example
//!
//! ```rust
//! use topotableslib::data::{aggregate, AttributeCatalog, Manifest};
//!
//! let manifest = Manifest::builtin().unwrap();
//! let catalog = AttributeCatalog::build(&manifest.attributes, &manifest.descriptions);
//! let records = aggregate(&manifest.parsers, &manifest.mandatory);
//! assert_eq!(records.len(), manifest.parsers.len());
//! assert!(catalog.contains("charges"));
//! ```

pub mod aggregate;
pub mod catalog;
pub mod manifest;

pub use aggregate::{aggregate, FormatRecord};
pub use catalog::{AttributeCatalog, CatalogEntry, CONNECTIVITY_ATTRS, IGNORED_ATTRS};
pub use manifest::{AttributeDescriptor, FormatName, Manifest, ParserFixture, MDANALYSIS_MANIFEST};
