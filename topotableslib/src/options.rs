//! Input options for table generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where and how tables are generated.
///
/// ```rust
/// use topotableslib::GenerateOptions;
///
/// let options = GenerateOptions::new()
///     .output_dir("doc/source")
///     .xref_suffix("-format")
///     .dry_run(true);
/// assert!(options.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Documentation source root; table paths are relative to it
    pub output_dir: PathBuf,
    /// Appended to every cross-reference key
    pub xref_suffix: String,
    /// Build the tables without writing them
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            xref_suffix: String::new(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the output root
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builder: set the cross-reference key suffix
    pub fn xref_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.xref_suffix = suffix.into();
        self
    }

    /// Builder: enable or disable dry-run
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
