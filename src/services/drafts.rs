//! Draft file I/O service.
//!
//! This module centralizes all draft file operations, providing a consistent
//! interface for loading, saving, and listing product draft files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ProductDraft;

/// File extension for product draft files.
pub const DRAFT_EXTENSION: &str = "json";

/// Service for managing draft file I/O operations.
///
/// This service centralizes all draft file operations to ensure consistent
/// handling of file paths, error messages, and file system operations.
pub struct DraftService;

impl DraftService {
    /// Loads a product draft from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the draft file to load
    ///
    /// # Returns
    ///
    /// * `Ok(ProductDraft)` - Successfully parsed draft
    /// * `Err(...)` - File not found, parse error, or I/O error
    pub fn load(path: &Path) -> Result<ProductDraft> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {}", path.display()))?;
        let draft: ProductDraft = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse draft file {}", path.display()))?;
        Ok(draft)
    }

    /// Saves a product draft to a JSON file.
    ///
    /// This performs an atomic write using a temp file + rename pattern to
    /// ensure the file is never left in a corrupted state.
    ///
    /// # Arguments
    ///
    /// * `draft` - The draft to save
    /// * `path` - Path where the draft should be saved
    pub fn save(draft: &ProductDraft, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(draft).context("Failed to serialize draft")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create draft directory {}", parent.display())
                })?;
            }
        }

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write draft to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move draft into place at {} (temp file left at {})",
                path.display(),
                tmp_path.display()
            )
        })?;

        Ok(())
    }

    /// Lists draft files in a directory, sorted by file name.
    ///
    /// Non-draft files are skipped. A missing directory yields an empty
    /// list rather than an error (first run, nothing saved yet).
    pub fn list_drafts(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read drafts directory {}", dir.display()))?;

        let mut drafts: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| {
                p.is_file() && p.extension().is_some_and(|ext| ext == DRAFT_EXTENSION)
            })
            .collect();

        drafts.sort();
        Ok(drafts)
    }
}

/// Sanitizes a product name for use as a filename.
///
/// Replaces problematic characters with underscores and converts to lowercase.
///
/// # Examples
///
/// ```
/// # use lazycatalog::services::drafts::sanitize_filename;
/// assert_eq!(sanitize_filename("Linen Shirt"), "linen_shirt");
/// assert_eq!(sanitize_filename("Shirt/Slim:Fit"), "shirt_slim_fit");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}
