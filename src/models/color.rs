//! Color catalog data structures.
//!
//! The catalog is the fixed set of colors the form offers for tagging
//! variants and images. It is loaded from embedded JSON data.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::SwatchColor;

/// A single selectable color choice.
///
/// # Validation
///
/// - ID must be unique within the catalog
/// - ID format: kebab-case (lowercase, hyphens only, no spaces)
/// - Name must be non-empty, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChoice {
    /// Unique identifier in kebab-case (e.g., "forest-green")
    pub id: String,
    /// Display name (e.g., "Forest Green")
    pub name: String,
    /// Hex code rendered as the swatch indicator, if the color has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<String>,
    /// Optional grouping family (e.g., "green", "neutral")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Whether the color is offered for new selections
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Default value for `active` (true)
const fn default_active() -> bool {
    true
}

impl ColorChoice {
    /// Creates a new `ColorChoice` with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazycatalog::models::ColorChoice;
    ///
    /// let choice = ColorChoice::new("forest-green", "Forest Green").unwrap();
    /// assert!(choice.active);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty or not in kebab-case format
    /// - Name is empty or exceeds 50 characters
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        Self::validate_id(&id)?;
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            swatch: None,
            family: None,
            active: true,
        })
    }

    /// Sets the swatch hex code for this choice.
    #[must_use]
    pub fn with_swatch(mut self, hex: impl Into<String>) -> Self {
        self.swatch = Some(hex.into());
        self
    }

    /// Sets the family for this choice.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Parses the swatch hex code, if present and valid.
    #[must_use]
    pub fn swatch_color(&self) -> Option<SwatchColor> {
        self.swatch
            .as_deref()
            .and_then(|hex| SwatchColor::from_hex(hex).ok())
    }

    /// Validates choice ID format (kebab-case).
    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Color ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Color ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Color ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates choice name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Color name cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "Color name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }
}

/// The complete color catalog offered by the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCatalog {
    /// All color choices, active or not, in display order.
    pub colors: Vec<ColorChoice>,
}

impl ColorCatalog {
    /// Load the color catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/colors.json");
        let catalog: Self = serde_json::from_str(json_data)?;
        Ok(catalog)
    }

    /// Get a color choice by its identifier.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&ColorChoice> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Whether the catalog contains an active choice with this identifier.
    #[must_use]
    pub fn contains_active(&self, id: &str) -> bool {
        self.by_id(id).is_some_and(|c| c.active)
    }

    /// Active choices in display order.
    pub fn active_colors(&self) -> impl Iterator<Item = &ColorChoice> {
        self.colors.iter().filter(|c| c.active)
    }

    /// Display name for an identifier, falling back to the raw id for
    /// selections that no longer resolve (e.g., retired colors).
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.by_id(id).map_or(id, |c| c.name.as_str())
    }

    /// Get the number of choices in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { colors: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let choice = ColorChoice::new("forest-green", "Forest Green").unwrap();
        assert_eq!(choice.id, "forest-green");
        assert_eq!(choice.name, "Forest Green");
        assert!(choice.active);
        assert!(choice.swatch.is_none());
    }

    #[test]
    fn test_validate_id_invalid() {
        assert!(ColorChoice::new("", "Empty").is_err());
        assert!(ColorChoice::new("Forest", "Uppercase").is_err());
        assert!(ColorChoice::new("forest green", "Space").is_err());
        assert!(ColorChoice::new("forest_green", "Underscore").is_err());
        assert!(ColorChoice::new("-forest", "Leading hyphen").is_err());
        assert!(ColorChoice::new("forest-", "Trailing hyphen").is_err());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(ColorChoice::new("ok", "").is_err());
        assert!(ColorChoice::new("ok", "a".repeat(51)).is_err());
    }

    #[test]
    fn test_swatch_color() {
        let choice = ColorChoice::new("red", "Red")
            .unwrap()
            .with_swatch("#EF4444");
        let swatch = choice.swatch_color().expect("swatch should parse");
        assert_eq!(swatch, SwatchColor::new(239, 68, 68));

        let bare = ColorChoice::new("bare", "Bare").unwrap();
        assert!(bare.swatch_color().is_none());
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = ColorCatalog::load().expect("Failed to load catalog");
        assert!(!catalog.is_empty());

        // Every embedded entry must satisfy the same validation new() applies
        for choice in &catalog.colors {
            assert!(
                ColorChoice::new(choice.id.clone(), choice.name.clone()).is_ok(),
                "embedded color '{}' fails validation",
                choice.id
            );
        }
    }

    #[test]
    fn test_by_id_and_display_name() {
        let catalog = ColorCatalog {
            colors: vec![
                ColorChoice::new("red", "Red").unwrap(),
                ColorChoice::new("navy", "Navy Blue").unwrap(),
            ],
        };

        assert_eq!(catalog.by_id("navy").unwrap().name, "Navy Blue");
        assert!(catalog.by_id("green").is_none());
        assert_eq!(catalog.display_name("red"), "Red");
        assert_eq!(catalog.display_name("retired-teal"), "retired-teal");
    }

    #[test]
    fn test_contains_active() {
        let mut retired = ColorChoice::new("teal", "Teal").unwrap();
        retired.active = false;
        let catalog = ColorCatalog {
            colors: vec![ColorChoice::new("red", "Red").unwrap(), retired],
        };

        assert!(catalog.contains_active("red"));
        assert!(!catalog.contains_active("teal"));
        assert!(!catalog.contains_active("missing"));
        assert_eq!(catalog.active_colors().count(), 1);
    }
}
