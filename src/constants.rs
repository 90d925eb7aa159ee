//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and directory naming.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyCatalog";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazycatalog";

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "LazyCatalog";
