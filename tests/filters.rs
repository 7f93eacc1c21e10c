// tests/filters.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, scanner_cmd};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Scans `project` and returns the report from the directory tree onwards,
/// leaving out the configuration section that lists the patterns.
fn scan(project: &Path, report: &Path, extra: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    scanner_cmd()
        .arg(project)
        .arg("-o")
        .arg(report)
        .args(["-n", "Proj"])
        .args(extra)
        .assert()
        .success();
    let text = fs::read_to_string(report)?;
    let body_start = text.find("## 2. Directory Structure").ok_or("missing tree section")?;
    Ok(text[body_start..].to_string())
}

#[test]
fn test_default_ignores_prune_directories() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), "node_modules/pkg/index.js", "module.exports = 1;")?;
    create_file(project.path(), "src/app.js", "console.log(1);")?;
    create_file(project.path(), "Cargo.lock", "# lock")?;

    let text = scan(project.path(), &out.path().join("r.txt"), &[])?;
    assert!(!text.contains("node_modules"));
    assert!(!text.contains("index.js"));
    assert!(!text.contains("Cargo.lock"));
    assert!(text.contains("FILE: src/app.js\n"));
    // Cargo.lock is an ignored file and counts as skipped; pruned directory contents do not.
    assert!(text.contains("- **Files Skipped:** 1\n"));
    Ok(())
}

#[test]
fn test_oversized_file_is_listed_but_skipped_with_warning() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), "big.txt", "0123456789")?;
    create_file(project.path(), "small.txt", "01")?;

    let text = scan(project.path(), &out.path().join("r.txt"), &["-m", "5"])?;
    assert!(text.contains("├── big.txt (10.00 B)\n"));
    assert!(!text.contains("FILE: big.txt"));
    assert!(text.contains("FILE: small.txt\n"));
    assert!(text.contains("### Warnings (1)\n- Skipped 'big.txt': 10.00 B exceeds the 5.00 B size limit\n"));
    assert!(text.contains("- **Files Processed:** 1\n- **Files Skipped:** 1\n"));
    Ok(())
}

#[test]
fn test_extension_override() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), "a.rs", "fn a() {}")?;
    create_file(project.path(), "b.py", "print(1)")?;
    create_file(project.path(), "c.RS", "fn c() {}")?;

    let text = scan(project.path(), &out.path().join("r.txt"), &["-e", "RS"])?;
    assert!(text.contains("FILE: a.rs\n"));
    assert!(text.contains("FILE: c.RS\nType: RS |"));
    assert!(!text.contains("FILE: b.py"));
    // Non-eligible files still appear in the tree.
    assert!(text.contains("b.py (8.00 B)"));
    assert!(text.contains("- **RS:** 2 files (100.0%)\n"));
    Ok(())
}

#[test]
fn test_dotfiles_in_tree_only() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), ".eslintrc.json", "{}")?;
    create_file(project.path(), "package.json", "{}")?;

    let text = scan(project.path(), &out.path().join("r.txt"), &[])?;
    assert!(text.contains("├── .eslintrc.json (2.00 B)\n"));
    assert!(!text.contains("FILE: .eslintrc.json"));
    assert!(text.contains("FILE: package.json\n"));
    Ok(())
}

#[test]
fn test_wildcard_and_replaced_ignores() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), "src/app.test.js", "test()")?;
    create_file(project.path(), "src/app.js", "run()")?;
    create_file(project.path(), "build/out.js", "built()")?;

    let added = scan(project.path(), &out.path().join("a.txt"), &["-I", "*.test.js"])?;
    assert!(!added.contains("app.test.js"));
    assert!(!added.contains("build/"));
    assert!(added.contains("FILE: src/app.js\n"));

    // Replacing the defaults drops `build` from the ignore list.
    let replaced = scan(project.path(), &out.path().join("b.txt"), &["-i", "*.test.js"])?;
    assert!(replaced.contains("├── build/\n"));
    assert!(replaced.contains("FILE: build/out.js\n"));
    assert!(!replaced.contains("FILE: src/app.test.js"));
    Ok(())
}

#[test]
fn test_report_outside_root_does_not_hide_same_named_files() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    create_file(project.path(), "docs/README.md", "# Docs\n")?;

    let text = scan(project.path(), &out.path().join("README.md"), &[])?;
    assert!(text.contains("└── docs/\n    └── README.md (7.00 B)\n"));
    assert!(text.contains("FILE: docs/README.md\n"));
    assert!(text.contains("- **Files Processed:** 1\n- **Files Skipped:** 0\n"));
    Ok(())
}
