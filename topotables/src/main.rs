//! # topotables
//!
//! Writes the topology attribute tables of the MDAnalysis documentation.
//!
//! ## Overview
//!
//! topotables is built on top of topotableslib. It reads a manifest of
//! topology attributes and parser expectations (the MDAnalysis one is built
//! in), then writes three RST tables under the documentation source root:
//!
//! - `formats/topology_parsers.txt`
//! - `generated/topology/topologyattrs.txt`
//! - `generated/topology/connectivityattrs.txt`
//!
//! ## Usage
//!
//! ```bash
//! # Write the tables under the current directory (doc/source)
//! topotables
//!
//! # Write them somewhere else
//! topotables path/to/doc/source
//!
//! # Use a custom manifest
//! topotables --manifest topology.toml
//!
//! # Build without writing, print the tables as JSON
//! topotables --dry-run --output json
//! ```

mod logging;
mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use topotableslib::{generate, GenerateOptions, Manifest};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("topotables")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes the topology attribute / file format tables for the documentation")
        .arg(
            Arg::new("output-dir")
                .help("Documentation source root the tables are written under")
                .default_value("."),
        )
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .help("TOML manifest of attributes and parsers (defaults to the built-in one)"),
        )
        .arg(
            Arg::new("xref-suffix")
                .long("xref-suffix")
                .allow_hyphen_values(true)
                .help("Suffix appended to every format cross-reference key"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Build the tables without writing them"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Disable logging"),
        )
}

/// Load the manifest named on the command line, or the built-in one
fn load_manifest(matches: &ArgMatches) -> topotableslib::Result<Manifest> {
    match matches.get_one::<String>("manifest") {
        Some(path) => Manifest::load(path),
        None => Manifest::builtin(),
    }
}

/// Build generation options from matches
fn build_options(matches: &ArgMatches) -> GenerateOptions {
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let mut options = GenerateOptions::new()
        .output_dir(output_dir)
        .dry_run(matches.get_flag("dry-run"));
    if let Some(suffix) = matches.get_one::<String>("xref-suffix") {
        options = options.xref_suffix(suffix.as_str());
    }
    options
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let manifest = load_manifest(matches)?;
    tracing::info!(
        attributes = manifest.attributes.len(),
        parsers = manifest.parsers.len(),
        "manifest loaded"
    );

    let options = build_options(matches);
    let result = generate(&manifest, &options)?;

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => render::render_json(&result),
        _ => render::render_summary(&result, options.dry_run),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let verbosity = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");
    if let Err(e) = logging::setup_logging(verbosity, quiet) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&matches) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
