//! Variant row data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock status of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariantStatus {
    /// Variant is offered for sale
    #[default]
    Active,
    /// Variant is hidden from the storefront
    Inactive,
}

impl VariantStatus {
    /// Cycle to the other status (used by the editor toggle).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// One repeatable variant row of a product draft.
///
/// A variant is a sellable combination of color and size. Its color
/// selection is what feeds the available-color set that image rows are
/// restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    /// Unique identifier for this row (stable across edits/reorders)
    #[serde(default = "generate_row_id")]
    pub id: String,
    /// Selected color choice id, or None when no color is selected yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<String>,
    /// Size label (e.g., "M", "42", "One Size")
    pub size: String,
    /// Units in stock
    #[serde(default)]
    pub stock_quantity: u32,
    /// Optional stock-keeping unit code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Whether the variant is offered for sale
    #[serde(default)]
    pub status: VariantStatus,
}

/// Generates a new unique row ID
fn generate_row_id() -> String {
    Uuid::new_v4().to_string()
}

impl VariantRow {
    /// Creates a new empty variant row with no color selected.
    #[must_use]
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            id: generate_row_id(),
            color_id: None,
            size: size.into(),
            stock_quantity: 0,
            sku: None,
            status: VariantStatus::Active,
        }
    }

    /// Sets the color selection.
    #[must_use]
    pub fn with_color(mut self, color_id: impl Into<String>) -> Self {
        self.color_id = Some(color_id.into());
        self
    }

    /// Sets the SKU.
    #[must_use]
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Sets the stock quantity.
    #[must_use]
    pub const fn with_stock(mut self, quantity: u32) -> Self {
        self.stock_quantity = quantity;
        self
    }
}

impl Default for VariantRow {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_has_no_color() {
        let row = VariantRow::new("M");
        assert!(row.color_id.is_none());
        assert_eq!(row.size, "M");
        assert_eq!(row.stock_quantity, 0);
        assert_eq!(row.status, VariantStatus::Active);
        assert!(!row.id.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let row = VariantRow::new("L")
            .with_color("navy")
            .with_sku("TS-NV-L")
            .with_stock(12);
        assert_eq!(row.color_id.as_deref(), Some("navy"));
        assert_eq!(row.sku.as_deref(), Some("TS-NV-L"));
        assert_eq!(row.stock_quantity, 12);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(VariantStatus::Active.toggled(), VariantStatus::Inactive);
        assert_eq!(VariantStatus::Inactive.toggled(), VariantStatus::Active);
        assert_eq!(VariantStatus::Active.label(), "active");
    }

    #[test]
    fn test_rows_get_distinct_ids() {
        let a = VariantRow::new("S");
        let b = VariantRow::new("S");
        assert_ne!(a.id, b.id);
    }
}
