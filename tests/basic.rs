// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, scanner_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_report_layout() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    let report = out.path().join("report.txt");
    create_file(project.path(), "src/main.rs", "fn main() {}\n")?;
    create_file(project.path(), "README.md", "# Demo")?;

    scanner_cmd()
        .arg(project.path())
        .arg("-o")
        .arg(&report)
        .arg("-n")
        .arg("Demo")
        .assert()
        .success();

    let text = fs::read_to_string(&report)?;
    assert!(text.starts_with("# Demo Project Overview\n\nGenerated: "));
    assert!(text.contains("\n## 1. Scan Configuration\n\n- **Accepted Extensions:** "));
    assert!(text.contains("- **Max File Size:** 10.00 MB\n"));
    assert!(text.contains("- **Content Hashes:** MD5\n"));
    assert!(text.contains(
        "## 2. Directory Structure\n\nDemo/\n├── src/\n│   └── main.rs (13.00 B)\n└── README.md (6.00 B)\n"
    ));
    assert!(text.contains("## 3. File Contents\n\n"));
    assert!(text.contains(
        "FILE: src/main.rs\nType: RS | Size: 13.00 B | Lines: 2\nMD5: "
    ));
    assert!(text.contains("FILE: README.md\nType: MD | Size: 6.00 B | Lines: 1\n"));
    // Blocks follow traversal order.
    let main_pos = text.find("FILE: src/main.rs").unwrap();
    let readme_pos = text.find("FILE: README.md").unwrap();
    assert!(main_pos < readme_pos);
    assert!(text.contains("## 4. Summary Report\n\n- **Files Processed:** 2\n- **Files Skipped:** 0\n"));
    Ok(())
}

#[test]
fn test_default_output_is_written_into_root() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    create_file(project.path(), "lib.rs", "pub fn f() {}\n")?;

    scanner_cmd()
        .arg(project.path())
        .arg("--name")
        .arg("Widget")
        .assert()
        .success();

    let report = project.path().join("_WidgetOverview.txt");
    let text = fs::read_to_string(&report)?;
    assert!(text.starts_with("# Widget Project Overview\n"));
    assert!(text.contains("FILE: lib.rs\n"));
    Ok(())
}

#[test]
fn test_report_never_embeds_itself() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    create_file(project.path(), "notes.txt", "hello\n")?;

    for _ in 0..2 {
        scanner_cmd()
            .arg(project.path())
            .args(["-n", "Self"])
            .assert()
            .success();
    }

    let text = fs::read_to_string(project.path().join("_SelfOverview.txt"))?;
    assert!(!text.contains("FILE: _SelfOverview.txt"));
    assert_eq!(text.matches("FILE: notes.txt").count(), 1);
    assert!(text.contains("- **Files Processed:** 1\n- **Files Skipped:** 1\n"));
    Ok(())
}

#[test]
fn test_empty_root() -> Result<(), Box<dyn std::error::Error>> {
    let project = tempdir()?;
    let out = tempdir()?;
    let report = out.path().join("empty.txt");

    scanner_cmd()
        .arg(project.path())
        .arg("-o")
        .arg(&report)
        .args(["-n", "Empty"])
        .assert()
        .success();

    let text = fs::read_to_string(&report)?;
    assert!(text.contains("## 2. Directory Structure\n\nEmpty/\n\n## 3. File Contents\n"));
    assert!(text.contains("- **Files Processed:** 0\n"));
    assert!(text.contains("### File Types\n- (none)\n"));
    assert!(!text.contains("### Errors"));
    Ok(())
}
