//! End-to-end tests for `lazycatalog colors` command.

use std::process::Command;

/// Path to the lazycatalog binary
fn lazycatalog_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazycatalog")
}

#[test]
fn test_colors_lists_catalog() {
    let output = Command::new(lazycatalog_bin())
        .args(["colors"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("navy"));
    assert!(stdout.contains("Navy"));
    // Inactive colors are hidden by default
    assert!(!stdout.contains("khaki"));
}

#[test]
fn test_colors_all_includes_inactive() {
    let output = Command::new(lazycatalog_bin())
        .args(["colors", "--all"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("khaki"));
    assert!(stdout.contains("(inactive)"));
}

#[test]
fn test_colors_json() {
    let output = Command::new(lazycatalog_bin())
        .args(["colors", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let colors: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let list = colors.as_array().expect("JSON output is an array");
    assert!(!list.is_empty());
    assert!(list
        .iter()
        .any(|c| c["id"] == "navy" && c["swatch"] == "#1E3A5F"));
    // Active-only by default
    assert!(list.iter().all(|c| c["id"] != "khaki"));
}
