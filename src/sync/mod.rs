//! Color availability synchronization.
//!
//! Keeps the color tags offered on image rows consistent with the colors
//! selected across variant rows. The module is a pure function of row
//! state: callers pass the rows in, get an outcome back, and re-run it
//! after every relevant change (draft open, variant color change, variant
//! row added or removed). There is no memory between runs.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::{ColorCatalog, ColorChoice, ImageRow, ProductDraft, VariantRow};

/// The derived set of color ids currently selected across all variant rows.
///
/// Never persisted; recomputed at every trigger. Iteration order is
/// deterministic (sorted by id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableColorSet {
    ids: BTreeSet<String>,
}

impl AvailableColorSet {
    /// Collects the unique, non-empty color selections from the variant rows.
    ///
    /// Rows with no color selected contribute nothing. Variant status does
    /// not matter: an inactive variant still anchors its color.
    #[must_use]
    pub fn collect(variants: &[VariantRow]) -> Self {
        let ids = variants
            .iter()
            .filter_map(|v| v.color_id.clone())
            .collect();
        Self { ids }
    }

    /// Whether the set contains the given color id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether no variant currently has a color selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of distinct colors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Iterates the color ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// One catalog color as offered by an image-row selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption<'a> {
    /// The underlying catalog entry
    pub choice: &'a ColorChoice,
    /// Enabled iff the color is in the available set
    pub enabled: bool,
}

/// Computes the option list an image-row color selector offers.
///
/// Every active catalog color appears; `enabled` marks membership in the
/// available set. Disabled options are rendered muted and cannot be
/// selected, but stay visible so the list does not jump around.
#[must_use]
pub fn color_options<'a>(
    catalog: &'a ColorCatalog,
    available: &AvailableColorSet,
) -> Vec<ColorOption<'a>> {
    catalog
        .active_colors()
        .map(|choice| ColorOption {
            choice,
            enabled: available.contains(&choice.id),
        })
        .collect()
}

/// Record of one image row color tag cleared by [`recompute`].
///
/// These are the change notifications dependent UI reacts to: the status
/// bar reports them and the CLI lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearedSelection {
    /// Stable id of the affected image row
    pub image_id: String,
    /// Index of the row at the time of clearing
    pub image_index: usize,
    /// The color id that was cleared
    pub color_id: String,
}

/// Result of one synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The available color set the pass was computed against
    pub available: AvailableColorSet,
    /// Image rows whose selection was cleared, in row order
    pub cleared: Vec<ClearedSelection>,
    /// True iff the available set is empty: the image pane shows its
    /// single persistent warning banner while this holds
    pub warning: bool,
}

/// Recomputes image-row color consistency against the current variant rows.
///
/// Every image row whose color tag is not in the available set has the tag
/// cleared (reset to none); all other rows are left untouched. Running the
/// pass twice with no intervening change reports no further clearings and
/// yields an identical final state.
pub fn recompute(variants: &[VariantRow], images: &mut [ImageRow]) -> SyncOutcome {
    let available = AvailableColorSet::collect(variants);

    let mut cleared = Vec::new();
    for (index, image) in images.iter_mut().enumerate() {
        let stale = image
            .color_id
            .as_ref()
            .is_some_and(|id| !available.contains(id));
        if stale {
            let color_id = image.color_id.take().unwrap_or_default();
            cleared.push(ClearedSelection {
                image_id: image.id.clone(),
                image_index: index,
                color_id,
            });
        }
    }

    let warning = available.is_empty();
    SyncOutcome {
        available,
        cleared,
        warning,
    }
}

/// Why a save was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBlocked {
    /// Index of the first image row that triggered the precondition
    pub first_image_index: usize,
}

impl fmt::Display for SaveBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot save: the draft has images but no variants. \
             Add at least one variant, or remove the images."
        )
    }
}

impl std::error::Error for SaveBlocked {}

/// Submission guard: refuses a save when image rows with content exist
/// while zero variant rows do.
///
/// Every other state saves normally; empty drafts are fine.
///
/// # Errors
///
/// Returns [`SaveBlocked`] pointing at the first offending image row.
pub fn check_save(draft: &ProductDraft) -> Result<(), SaveBlocked> {
    if !draft.variants.is_empty() {
        return Ok(());
    }

    match draft.images.iter().position(ImageRow::has_content) {
        Some(first_image_index) => Err(SaveBlocked { first_image_index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRow, ProductDraft, VariantRow};

    fn variants(colors: &[&str]) -> Vec<VariantRow> {
        colors
            .iter()
            .map(|c| VariantRow::new("M").with_color(*c))
            .collect()
    }

    #[test]
    fn test_collect_dedupes_and_skips_unselected() {
        let mut rows = variants(&["red", "blue", "red"]);
        rows.push(VariantRow::new("XL")); // no color selected

        let set = AvailableColorSet::collect(&rows);
        assert_eq!(set.len(), 2);
        assert!(set.contains("red"));
        assert!(set.contains("blue"));
        assert!(!set.contains("green"));
    }

    #[test]
    fn test_collect_empty() {
        let set = AvailableColorSet::collect(&[]);
        assert!(set.is_empty());

        let set = AvailableColorSet::collect(&[VariantRow::new("M")]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_is_sorted() {
        let set = AvailableColorSet::collect(&variants(&["navy", "beige", "green"]));
        let ids: Vec<&str> = set.iter().collect();
        assert_eq!(ids, vec!["beige", "green", "navy"]);
    }

    #[test]
    fn test_recompute_clears_stale_tag() {
        let vars = variants(&["red", "blue"]);
        let mut images = vec![
            ImageRow::new("a.jpg").with_color("green"),
            ImageRow::new("b.jpg").with_color("red"),
            ImageRow::new("c.jpg"),
        ];

        let outcome = recompute(&vars, &mut images);

        assert!(images[0].color_id.is_none(), "stale tag must be cleared");
        assert_eq!(images[1].color_id.as_deref(), Some("red"));
        assert!(images[2].color_id.is_none());

        assert_eq!(outcome.cleared.len(), 1);
        assert_eq!(outcome.cleared[0].image_index, 0);
        assert_eq!(outcome.cleared[0].color_id, "green");
        assert_eq!(outcome.cleared[0].image_id, images[0].id);
        assert!(!outcome.warning);
    }

    #[test]
    fn test_recompute_warning_iff_set_empty() {
        let mut images = vec![ImageRow::new("a.jpg")];
        let outcome = recompute(&[], &mut images);
        assert!(outcome.warning);

        let outcome = recompute(&variants(&["red"]), &mut images);
        assert!(!outcome.warning);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let vars = variants(&["red"]);
        let mut images = vec![
            ImageRow::new("a.jpg").with_color("green"),
            ImageRow::new("b.jpg").with_color("red"),
        ];

        let first = recompute(&vars, &mut images);
        let snapshot = images.clone();
        let second = recompute(&vars, &mut images);

        assert_eq!(first.cleared.len(), 1);
        assert!(second.cleared.is_empty(), "second pass must clear nothing");
        assert_eq!(images, snapshot);
        assert_eq!(first.available, second.available);
    }

    #[test]
    fn test_recompute_preserves_other_fields() {
        let mut images = vec![ImageRow::new("a.jpg")
            .with_color("green")
            .with_alt_text("Front view")
            .with_order(3)
            .as_primary()];

        recompute(&[], &mut images);

        assert!(images[0].color_id.is_none());
        assert_eq!(images[0].file, "a.jpg");
        assert_eq!(images[0].alt_text, "Front view");
        assert_eq!(images[0].display_order, 3);
        assert!(images[0].is_primary);
    }

    #[test]
    fn test_color_options_enablement() {
        let catalog = ColorCatalog::load().unwrap();
        let available = AvailableColorSet::collect(&variants(&["red", "navy"]));

        let options = color_options(&catalog, &available);

        // Only active catalog colors are offered
        assert_eq!(options.len(), catalog.active_colors().count());
        for option in &options {
            let expect_enabled = option.choice.id == "red" || option.choice.id == "navy";
            assert_eq!(
                option.enabled, expect_enabled,
                "unexpected enablement for '{}'",
                option.choice.id
            );
        }
    }

    #[test]
    fn test_check_save_blocks_images_without_variants() {
        let mut draft = ProductDraft::new("Shirt").unwrap();
        draft.add_image(ImageRow::new("front.jpg"));

        let err = check_save(&draft).unwrap_err();
        assert_eq!(err.first_image_index, 0);
        assert!(err.to_string().contains("no variants"));
    }

    #[test]
    fn test_check_save_allows_other_states() {
        // Empty draft saves
        let mut draft = ProductDraft::new("Shirt").unwrap();
        assert!(check_save(&draft).is_ok());

        // Variants without images save
        draft.add_variant(VariantRow::new("M"));
        assert!(check_save(&draft).is_ok());

        // Both groups populated save
        draft.add_image(ImageRow::new("front.jpg"));
        assert!(check_save(&draft).is_ok());
    }

    #[test]
    fn test_check_save_ignores_empty_placeholder_rows() {
        let mut draft = ProductDraft::new("Shirt").unwrap();
        draft.add_image(ImageRow::new(""));
        // A blank row the user just added does not count as content
        assert!(check_save(&draft).is_ok());
    }
}
