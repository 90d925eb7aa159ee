//! Product draft document: metadata plus the two repeatable row groups.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ImageRow, VariantRow};

/// Descriptive metadata for a product draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMetadata {
    /// Product name shown in the title bar and listings
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Draft author
    #[serde(default)]
    pub author: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Draft format version
    #[serde(default = "default_version")]
    pub version: String,
}

/// Current draft format version
fn default_version() -> String {
    "1.0".to_string()
}

/// A product draft: the document the editor operates on.
///
/// Holds the two repeatable row groups the admin form presents. The rows
/// are owned by the surrounding form; the synchronizer only observes them
/// and clears stale image color tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Draft metadata
    pub metadata: DraftMetadata,
    /// Variant rows (color x size combinations)
    #[serde(default)]
    pub variants: Vec<VariantRow>,
    /// Image rows (gallery entries, optionally color tagged)
    #[serde(default)]
    pub images: Vec<ImageRow>,
}

impl ProductDraft {
    /// Creates a new empty draft with the given product name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            anyhow::bail!("Product name cannot be empty");
        }

        let now = Utc::now();
        Ok(Self {
            metadata: DraftMetadata {
                name,
                description: String::new(),
                author: String::new(),
                created: now,
                modified: now,
                tags: Vec::new(),
                version: default_version(),
            },
            variants: Vec::new(),
            images: Vec::new(),
        })
    }

    /// Appends a variant row and returns its index.
    pub fn add_variant(&mut self, row: VariantRow) -> usize {
        self.variants.push(row);
        self.variants.len() - 1
    }

    /// Removes the variant row at `index`, if it exists.
    pub fn remove_variant(&mut self, index: usize) -> Option<VariantRow> {
        if index < self.variants.len() {
            Some(self.variants.remove(index))
        } else {
            None
        }
    }

    /// Appends an image row and returns its index.
    ///
    /// New rows go to the end of the gallery order.
    pub fn add_image(&mut self, mut row: ImageRow) -> usize {
        let next_order = self
            .images
            .iter()
            .map(|i| i.display_order)
            .max()
            .map_or(0, |o| o + 1);
        if row.display_order == 0 {
            row.display_order = next_order;
        }
        self.images.push(row);
        self.images.len() - 1
    }

    /// Removes the image row at `index`, if it exists.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageRow> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Marks the given image as primary, clearing the flag on all others.
    pub fn set_primary_image(&mut self, index: usize) {
        for (i, image) in self.images.iter_mut().enumerate() {
            image.is_primary = i == index;
        }
    }

    /// Updates the modified timestamp. Called by the save path.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRow, VariantRow};

    #[test]
    fn test_new_draft() {
        let draft = ProductDraft::new("Linen Shirt").unwrap();
        assert_eq!(draft.metadata.name, "Linen Shirt");
        assert_eq!(draft.metadata.version, "1.0");
        assert!(draft.variants.is_empty());
        assert!(draft.images.is_empty());
    }

    #[test]
    fn test_new_draft_empty_name() {
        assert!(ProductDraft::new("").is_err());
    }

    #[test]
    fn test_add_remove_variant() {
        let mut draft = ProductDraft::new("Linen Shirt").unwrap();
        let idx = draft.add_variant(VariantRow::new("M").with_color("navy"));
        assert_eq!(idx, 0);
        assert_eq!(draft.variants.len(), 1);

        let removed = draft.remove_variant(0).unwrap();
        assert_eq!(removed.size, "M");
        assert!(draft.remove_variant(0).is_none());
    }

    #[test]
    fn test_add_image_assigns_order() {
        let mut draft = ProductDraft::new("Linen Shirt").unwrap();
        draft.add_image(ImageRow::new("a.jpg"));
        draft.add_image(ImageRow::new("b.jpg"));
        draft.add_image(ImageRow::new("c.jpg"));

        assert_eq!(draft.images[0].display_order, 0);
        assert_eq!(draft.images[1].display_order, 1);
        assert_eq!(draft.images[2].display_order, 2);

        // Explicit order is preserved
        draft.add_image(ImageRow::new("d.jpg").with_order(10));
        assert_eq!(draft.images[3].display_order, 10);
    }

    #[test]
    fn test_set_primary_image_is_exclusive() {
        let mut draft = ProductDraft::new("Linen Shirt").unwrap();
        draft.add_image(ImageRow::new("a.jpg").as_primary());
        draft.add_image(ImageRow::new("b.jpg"));

        draft.set_primary_image(1);
        assert!(!draft.images[0].is_primary);
        assert!(draft.images[1].is_primary);
    }

    #[test]
    fn test_draft_json_roundtrip() {
        let mut draft = ProductDraft::new("Linen Shirt").unwrap();
        draft.add_variant(VariantRow::new("M").with_color("navy").with_stock(4));
        draft.add_image(ImageRow::new("front.jpg").with_color("navy"));

        let json = serde_json::to_string_pretty(&draft).unwrap();
        let parsed: ProductDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, parsed);
    }
}
