//! Integration tests for topotables CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_topotables(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "topotables", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_topotables(&["--help"]);

    assert!(success);
    assert!(stdout.contains("topotables"));
    assert!(stdout.contains("--manifest"));
    assert!(stdout.contains("--dry-run"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--xref-suffix"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_topotables(&["--version"]);

    assert!(success);
    assert!(stdout.contains("topotables"));
}

#[test]
fn test_writes_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_topotables(&[&path_arg(dir.path())]);

    assert!(success);
    assert!(stdout.contains("formats/topology_parsers.txt"));
    assert!(stdout.contains("3 tables written"));

    let parsers = fs::read_to_string(dir.path().join("formats/topology_parsers.txt")).unwrap();
    assert!(parsers.contains("Format"));
    assert!(parsers.contains("Attributes read"));
    assert!(parsers.contains("Attributes guessed"));
    assert!(parsers.contains(":ref:`PDB, ENT <PDB>`"));

    let attrs =
        fs::read_to_string(dir.path().join("generated/topology/topologyattrs.txt")).unwrap();
    assert!(attrs.contains("AtomGroup"));
    assert!(attrs.contains("partial atomic charge"));

    let connectivity =
        fs::read_to_string(dir.path().join("generated/topology/connectivityattrs.txt")).unwrap();
    for kind in ["bonds", "angles", "dihedrals", "impropers"] {
        assert!(connectivity.contains(kind));
    }
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) = run_topotables(&[&path_arg(dir.path()), "--dry-run"]);

    assert!(success);
    assert!(stdout.contains("dry-run"));
    assert!(!dir.path().join("formats").exists());
    assert!(!dir.path().join("generated").exists());
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, success) =
        run_topotables(&[&path_arg(dir.path()), "--dry-run", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let tables = parsed["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0]["filename"], "formats/topology_parsers.txt");
    assert_eq!(tables[2]["rows"].as_array().unwrap().len(), 4);
    assert!(parsed["written"].as_array().unwrap().is_empty());
}

#[test]
fn test_xref_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, success) =
        run_topotables(&[&path_arg(dir.path()), "--xref-suffix", "-format"]);

    assert!(success);
    let parsers = fs::read_to_string(dir.path().join("formats/topology_parsers.txt")).unwrap();
    assert!(parsers.contains(":ref:`GRO <GRO-format>`"));
}

#[test]
fn test_custom_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("manifest.toml");
    fs::write(
        &manifest,
        r#"
mandatory = ["names"]

[[attribute]]
attrname = "resnames"
singular = "resname"

[[parser]]
format = "FOO"
expected = ["names", "resnames", "bonds"]
guessed = ["elements"]
"#,
    )
    .unwrap();
    let out = dir.path().join("docs");

    let (_, _, success) = run_topotables(&[
        &path_arg(&out),
        "--manifest",
        &path_arg(&manifest),
    ]);

    assert!(success);
    let parsers = fs::read_to_string(out.join("formats/topology_parsers.txt")).unwrap();
    assert!(parsers.contains(":ref:`FOO <FOO>`  resnames"));
    assert!(parsers.contains("elements"));
}

#[test]
fn test_manifest_drift_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("manifest.toml");
    fs::write(
        &manifest,
        r#"
mandatory = []
attribute = []

[[parser]]
format = "FOO"
expected = ["names"]
"#,
    )
    .unwrap();

    let (_, stderr, success) = run_topotables(&[
        &path_arg(dir.path()),
        "--manifest",
        &path_arg(&manifest),
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("guessed"));
    assert!(!dir.path().join("formats").exists());
}

#[test]
fn test_missing_manifest_fails() {
    let (_, stderr, success) = run_topotables(&["--manifest", "/nonexistent/manifest.toml"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
