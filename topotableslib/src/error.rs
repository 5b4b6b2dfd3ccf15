//! Error types for topotableslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a manifest or writing tables
#[derive(Error, Debug)]
pub enum TopoTablesError {
    /// Failed to read the manifest file
    #[error("failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest is not valid TOML or does not match the expected shape
    /// (missing `attrname`, `singular`, `expected`, `guessed`, ...)
    #[error("invalid manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// A parser declared an empty format name, an empty alias list, or an
    /// empty alias inside the list
    #[error("parser #{index} declares an empty format name or alias")]
    EmptyFormat { index: usize },

    /// The same attribute key was declared twice
    #[error("attribute '{0}' is declared more than once")]
    DuplicateAttribute(String),

    /// Two parsers share the same canonical format key
    #[error("format '{0}' is declared by more than one parser")]
    DuplicateFormat(String),

    /// Failed to write an output table
    #[error("failed to write table '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
