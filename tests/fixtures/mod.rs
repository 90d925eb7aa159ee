//! Shared test fixtures for E2E and integration tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use chrono::{TimeZone, Utc};
use lazycatalog::models::{DraftMetadata, ImageRow, ProductDraft, VariantRow};
use lazycatalog::services::DraftService;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a draft with deterministic metadata and no rows.
pub fn test_draft_empty() -> ProductDraft {
    let created = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();

    ProductDraft {
        metadata: DraftMetadata {
            name: "Linen Shirt".to_string(),
            description: "Integration test draft".to_string(),
            author: "Test Suite".to_string(),
            created,
            modified,
            tags: vec!["test".to_string()],
            version: "1.0".to_string(),
        },
        variants: Vec::new(),
        images: Vec::new(),
    }
}

/// Creates a consistent draft: two variants (navy, red) and two images
/// tagged with colors the variants use.
pub fn test_draft_consistent() -> ProductDraft {
    let mut draft = test_draft_empty();
    draft.add_variant(VariantRow::new("M").with_color("navy").with_stock(4));
    draft.add_variant(VariantRow::new("L").with_color("red").with_stock(2));
    draft.add_image(ImageRow::new("front.jpg").with_color("navy").as_primary());
    draft.add_image(ImageRow::new("back.jpg").with_color("red"));
    draft
}

/// Creates a draft with one image tagged 'green', which no variant uses.
pub fn test_draft_with_stale_tag() -> ProductDraft {
    let mut draft = test_draft_empty();
    draft.add_variant(VariantRow::new("M").with_color("navy"));
    draft.add_image(ImageRow::new("detail.jpg").with_color("green"));
    draft
}

/// Creates a draft that violates the submission precondition:
/// one image with content, zero variants.
pub fn test_draft_images_without_variants() -> ProductDraft {
    let mut draft = test_draft_empty();
    draft.add_image(ImageRow::new("front.jpg"));
    draft
}

/// Writes a draft to a temp directory and returns its path.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn create_temp_draft_file(draft: &ProductDraft) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("draft.json");
    DraftService::save(draft, &path).expect("Failed to write draft fixture");
    (path, temp_dir)
}
