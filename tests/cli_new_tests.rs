//! End-to-end tests for `lazycatalog new` command.

use std::process::Command;

use lazycatalog::services::DraftService;
use tempfile::TempDir;

/// Path to the lazycatalog binary
fn lazycatalog_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazycatalog")
}

#[test]
fn test_new_creates_draft_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("linen_shirt.json");

    let output = Command::new(lazycatalog_bin())
        .args([
            "new",
            "Linen Shirt",
            "--output",
            path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let draft = DraftService::load(&path).expect("Created file should parse");
    assert_eq!(draft.metadata.name, "Linen Shirt");
    assert!(draft.variants.is_empty());
    assert!(draft.images.is_empty());
}

#[test]
fn test_new_default_filename_is_sanitized() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(lazycatalog_bin())
        .args(["new", "Linen Shirt"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("linen_shirt.json").exists());
}

#[test]
fn test_new_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("draft.json");
    std::fs::write(&path, "{}").unwrap();

    let output = Command::new(lazycatalog_bin())
        .args(["new", "Shirt", "--output", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(64), "usage errors exit with 64");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Refusing to overwrite"));

    // Original file untouched
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}
