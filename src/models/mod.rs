//! Data models for product drafts, rows, and the color catalog.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod color;
pub mod image;
pub mod product;
pub mod swatch;
pub mod variant;

// Re-export all model types
pub use color::{ColorCatalog, ColorChoice};
pub use image::ImageRow;
pub use product::{DraftMetadata, ProductDraft};
pub use swatch::SwatchColor;
pub use variant::{VariantRow, VariantStatus};
