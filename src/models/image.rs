//! Image row data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One repeatable image row of a product draft.
///
/// An image can be tagged with the color it depicts. The tag is restricted
/// to colors some variant actually uses; the synchronizer clears tags that
/// fall out of that set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRow {
    /// Unique identifier for this row (stable across edits/reorders)
    #[serde(default = "generate_row_id")]
    pub id: String,
    /// Color tag: the color choice this image depicts, or None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    /// Image file path or URL, relative to the media root
    pub file: String,
    /// Alternative text for accessibility
    #[serde(default)]
    pub alt_text: String,
    /// Whether this is the product's primary image
    #[serde(default)]
    pub is_primary: bool,
    /// Sort position within the gallery
    #[serde(default)]
    pub display_order: u32,
}

/// Generates a new unique row ID
fn generate_row_id() -> String {
    Uuid::new_v4().to_string()
}

impl ImageRow {
    /// Creates a new image row with no color tag.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            id: generate_row_id(),
            color_id: None,
            file: file.into(),
            alt_text: String::new(),
            is_primary: false,
            display_order: 0,
        }
    }

    /// Sets the color tag.
    #[must_use]
    pub fn with_color(mut self, color_id: impl Into<String>) -> Self {
        self.color_id = Some(color_id.into());
        self
    }

    /// Sets the alt text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Sets the display order.
    #[must_use]
    pub const fn with_order(mut self, display_order: u32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Marks this image as the primary one.
    #[must_use]
    pub const fn as_primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Whether the row has any user-entered content beyond its id.
    ///
    /// Used by the submission guard: an empty placeholder row does not
    /// count as "an image exists".
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.file.is_empty() || !self.alt_text.is_empty() || self.color_id.is_some()
    }
}
