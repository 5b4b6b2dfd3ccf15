//! End-to-end generation: manifest in, RST files out.
//!
//! Generation runs in two phases. Phase 1 derives the catalog, the format
//! records and the immutable support index. Phase 2 assembles the tables
//! from them. Nothing is written until every table has been built, so a bad
//! manifest never leaves half the tables updated.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::{aggregate, AttributeCatalog, Manifest};
use crate::error::TopoTablesError;
use crate::options::GenerateOptions;
use crate::output::{
    connectivity_attrs_table, topology_attrs_table, topology_parsers_table, Table,
};
use crate::support::AttributeSupportIndex;
use crate::Result;

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Output root the table paths are relative to
    pub root: PathBuf,
    /// Tables in generation order: formats, attributes, connectivity
    pub tables: Vec<Table>,
    /// Files actually written (empty on dry-run)
    pub written: Vec<PathBuf>,
}

/// Build the three tables from a manifest.
pub fn build_tables(manifest: &Manifest, xref_suffix: &str) -> Vec<Table> {
    let catalog = AttributeCatalog::build(&manifest.attributes, &manifest.descriptions);
    let records = aggregate(&manifest.parsers, &manifest.mandatory);
    let index = AttributeSupportIndex::build(&records, xref_suffix);
    tracing::debug!(
        attributes = catalog.len(),
        formats = records.len(),
        "built attribute catalog and support index"
    );

    vec![
        topology_parsers_table(&records, xref_suffix),
        topology_attrs_table(&catalog, &manifest.mandatory, &index),
        connectivity_attrs_table(&index),
    ]
}

/// Write one table under `root`, creating parent directories.
pub fn write_table(table: &Table, root: &Path) -> Result<PathBuf> {
    let path = root.join(&table.filename);
    let write_err = |source| TopoTablesError::Write {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let file = File::create(&path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(table.to_rst().as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), rows = table.rows.len(), "wrote table");
    Ok(path)
}

/// Build every table and, unless this is a dry-run, write them all.
pub fn generate(manifest: &Manifest, options: &GenerateOptions) -> Result<GenerateResult> {
    let tables = build_tables(manifest, &options.xref_suffix);

    let written = if options.dry_run {
        tracing::debug!("dry-run, not writing tables");
        Vec::new()
    } else {
        tables
            .iter()
            .map(|t| write_table(t, &options.output_dir))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(GenerateResult {
        root: options.output_dir.clone(),
        tables,
        written,
    })
}
