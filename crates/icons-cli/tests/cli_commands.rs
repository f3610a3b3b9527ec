//! Runs CLI commands against a temporary icon tree.

use std::fs;
use std::path::Path;

use clap::Parser;
use icons_cli::{Cli, CliError, inspect, run};

/// Smallest header imagesize needs: PNG signature plus an IHDR chunk.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn icon_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for path in [
        "b_storage/s3-bucket.png",
        "a_compute/lambda.png",
        "a_compute/ec2-instance.png",
        "general/readme.txt",
    ] {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, png_bytes(48, 48)).unwrap();
    }
    dir
}

fn run_args(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("icons-cli").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn root_arg(dir: &Path) -> String {
    dir.to_string_lossy().into_owned()
}

#[test]
fn search_without_filters_lists_master_order() {
    let dir = icon_tree();
    let out = run_args(&["search", &root_arg(dir.path())]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "a_compute/ec2-instance.png",
            "a_compute/lambda.png",
            "b_storage/s3-bucket.png",
            "3 icon(s) found",
        ]
    );
}

#[test]
fn search_by_text() {
    let dir = icon_tree();
    let out = run_args(&["search", &root_arg(dir.path()), "lambda"]).unwrap();
    assert!(out.starts_with("a_compute/lambda.png\n1 icon(s) found"));
}

#[test]
fn search_two_categories_intersect_and_union() {
    let dir = icon_tree();
    let root = root_arg(dir.path());
    let args = ["search", &root, "--service", "a_compute", "--resource", "b_storage"];

    let out = run_args(&args).unwrap();
    assert_eq!(out.trim(), "0 icon(s) found");

    let mut union_args = args.to_vec();
    union_args.push("--union");
    let out = run_args(&union_args).unwrap();
    assert!(out.ends_with("3 icon(s) found\n"));
}

#[test]
fn search_rejects_unknown_category() {
    let dir = icon_tree();
    let err = run_args(&["search", &root_arg(dir.path()), "--service", "a_missing"]).unwrap_err();
    assert!(matches!(err, CliError::UnknownCategory { .. }));
}

#[test]
fn search_json_output() {
    let dir = icon_tree();
    let out = run_args(&["search", &root_arg(dir.path()), "s3", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["display_name"], "s3 bucket");
    assert_eq!(value[0]["folder"], "b_storage");
}

#[test]
fn categories_lists_both_axes() {
    let dir = icon_tree();
    let out = run_args(&["categories", &root_arg(dir.path())]).unwrap();
    assert!(out.contains("Services:"));
    assert!(out.contains("Resources:"));
    assert!(out.contains("a_compute"));
    assert!(out.contains("storage"));
}

#[test]
fn manifest_uses_url_prefix() {
    let dir = icon_tree();
    let out = run_args(&["manifest", &root_arg(dir.path()), "--url-prefix", "/static/"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["path"], "a_compute/ec2-instance.png");
    assert_eq!(value[0]["url"], "/static/a_compute/ec2-instance.png");
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = run_args(&["index", &root_arg(&missing)]).unwrap_err();
    assert!(matches!(err, CliError::Load(_)));
}

#[test]
fn inspect_reports_dimensions_and_font_size() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir
        .path()
        .join("a_compute")
        .join("Arch_AWS-Elastic-Container-Registry_64.png");
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, png_bytes(64, 32)).unwrap();

    let report = inspect(&file).unwrap();
    assert_eq!(report.folder.as_deref(), Some("a_compute"));
    assert_eq!(report.display_name, "Arch_AWS Elastic Container Registry_64");
    assert_eq!(report.font_size, "0.75rem");
    assert_eq!((report.width, report.height), (64, 32));
}
