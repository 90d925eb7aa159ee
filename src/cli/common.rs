//! Shared types for CLI command handlers.

use serde::Serialize;
use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, mapped to process exit codes.
#[derive(Debug)]
pub enum CliError {
    /// File system or serialization failure
    Io(String),
    /// The draft failed a consistency check
    Validation(String),
    /// The command was invoked incorrectly
    Usage(String),
}

impl CliError {
    /// Creates an I/O error with the given message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a usage error with the given message.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
            Self::Usage(_) => 64,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) | Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Per-check status summary in `check` output.
///
/// Values are "passed", "warning", or "failed".
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// Image color tags vs. available variant colors
    pub image_colors: String,
    /// Submission precondition (images require variants)
    pub submission: String,
    /// Selections resolve against the color catalog
    pub catalog: String,
}

impl CheckSummary {
    /// All checks passing.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            image_colors: "passed".to_string(),
            submission: "passed".to_string(),
            catalog: "passed".to_string(),
        }
    }
}

/// A single issue reported by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Human-readable description
    pub message: String,
    /// Index of the affected row within its group, if the issue is row-level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

/// Full `check` command response (also the `--json` payload).
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// True when no errors were found
    pub consistent: bool,
    /// The available color set, sorted
    pub available_colors: Vec<String>,
    /// Issues found, errors first
    pub issues: Vec<CheckMessage>,
    /// Per-check summary
    pub checks: CheckSummary,
    /// Number of image rows fixed (only non-zero with --fix)
    pub fixed: usize,
}
