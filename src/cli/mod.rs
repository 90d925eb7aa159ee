//! CLI command handlers for LazyCatalog.
//!
//! This module provides headless, scriptable access to LazyCatalog's core
//! functionality for automation, testing, and CI/CD integration.

pub mod check;
pub mod colors;
pub mod common;
pub mod new;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult};
pub use new::NewArgs;
