//! Output formatting: assemble tables and render them as RST.
//!
//! - **TableSpec / Table**: generic heading + per-row formatter contract
//! - **tables**: the three documentation tables
//! - **rst**: simple-table text rendering
//! - **xref**: Sphinx cross-reference cells
//!
//! Tables are pure presentation: every set they display has already been
//! computed by the data and support stages.

pub mod rst;
pub mod table;
pub mod tables;
pub mod xref;

pub use table::{Column, Table, TableSpec};
pub use tables::{
    connectivity_attrs_table, topology_attrs_table, topology_parsers_table,
    CONNECTIVITY_ATTRS_FILE, TOPOLOGY_ATTRS_FILE, TOPOLOGY_PARSERS_FILE,
};
pub use xref::{format_ref, sphinx_ref};
