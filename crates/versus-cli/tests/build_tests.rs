//! Integration tests for the build command

use std::fs;
use tempfile::TempDir;
use versus_cli::cli::BuildArgs;
use versus_cli::commands::execute_build;
use versus_cli::config::{OutputFormat, Profile};
use versus_cli::{CliError, Formatter};

// r## because the fixtures contain a "#verdict" anchor.
const GOOD_PAGE: &str = r##"
slug = "a-vs-b"
title = "A vs B"
description = "Head to head."

[hero]
headline = "A vs B"
cta_label = "See winner"
cta_url = "#verdict"

[comparison]
entities = [
    { key = "a", name = "A" },
    { key = "b", name = "B" },
]

[[comparison.rows]]
label = "Speed"
scores = { a = 9.0, b = 7.0 }
"##;

const BROKEN_PAGE: &str = r##"
slug = "a-vs-b-broken"
title = "A vs B"
description = "Head to head."

[hero]
headline = "A vs B"
cta_label = "See winner"
cta_url = "#verdict"

[comparison]
entities = [
    { key = "a", name = "A" },
    { key = "b", name = "B" },
]

[[comparison.rows]]
label = "Speed"
scores = { a = 9.0 }
"##;

fn profile(content: &TempDir, out: &TempDir) -> Profile {
    Profile {
        content_dir: content.path().to_path_buf(),
        output_dir: out.path().to_path_buf(),
    }
}

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

#[test]
fn test_build_writes_one_file_per_page() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(content.path().join("a-vs-b.toml"), GOOD_PAGE).unwrap();

    let args = BuildArgs {
        content: None,
        out: None,
    };
    execute_build(args, &profile(&content, &out), &formatter()).unwrap();

    let html = fs::read_to_string(out.path().join("a-vs-b.html")).unwrap();
    assert!(html.contains("<title>A vs B</title>"));
    assert!(html.contains("Winner: <strong>A</strong> (9.0)"));
}

#[test]
fn test_build_refuses_invalid_catalog() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(content.path().join("broken.toml"), BROKEN_PAGE).unwrap();

    let args = BuildArgs {
        content: None,
        out: None,
    };
    let err = execute_build(args, &profile(&content, &out), &formatter()).unwrap_err();
    assert!(matches!(err, CliError::ValidationFailed(1)));
    assert!(!out.path().join("a-vs-b-broken.html").exists());
}

#[test]
fn test_build_args_override_profile_dirs() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let unused = TempDir::new().unwrap();
    fs::write(content.path().join("a-vs-b.toml"), GOOD_PAGE).unwrap();

    let args = BuildArgs {
        content: Some(content.path().to_path_buf()),
        out: Some(out.path().to_path_buf()),
    };
    execute_build(args, &profile(&unused, &unused), &formatter()).unwrap();
    assert!(out.path().join("a-vs-b.html").exists());
}
