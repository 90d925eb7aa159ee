//! Consistency check command for draft files.
//!
//! Headless version of the in-editor synchronization: reports image rows
//! whose color tag is not anchored by any variant, the images-without-
//! variants precondition, and selections that no longer resolve against
//! the color catalog. With `--fix`, applies the clearing the synchronizer
//! prescribes and saves the draft back.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CheckMessage, CheckResponse, CheckSummary, CliError, CliResult};
use crate::models::ColorCatalog;
use crate::services::DraftService;
use crate::sync;

/// Check a draft for color consistency issues
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to the draft JSON file
    #[arg(short, long, value_name = "FILE")]
    pub draft: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Clear inconsistent image color tags and save the draft
    #[arg(long)]
    pub fix: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let mut draft = DraftService::load(&self.draft)
            .map_err(|e| CliError::io(format!("Failed to load draft: {e:#}")))?;

        let catalog = ColorCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load color catalog: {e:#}")))?;

        let mut checks = CheckSummary::all_passed();
        let mut issues = Vec::new();

        // Run the synchronizer. Without --fix it operates on a scratch copy
        // so the command stays read-only.
        let mut scratch = draft.images.clone();
        let outcome = sync::recompute(&draft.variants, &mut scratch);

        for cleared in &outcome.cleared {
            checks.image_colors = "failed".to_string();
            issues.push(CheckMessage {
                severity: "error".to_string(),
                message: format!(
                    "Image '{}' is tagged '{}', which no variant uses",
                    draft.images[cleared.image_index].file, cleared.color_id
                ),
                row: Some(cleared.image_index),
            });
        }

        if outcome.warning && !draft.images.is_empty() {
            if checks.image_colors == "passed" {
                checks.image_colors = "warning".to_string();
            }
            issues.push(CheckMessage {
                severity: "warning".to_string(),
                message: "No variant has a color selected; image color tags are unavailable"
                    .to_string(),
                row: None,
            });
        }

        // Submission precondition: images with content but zero variants
        if let Err(blocked) = sync::check_save(&draft) {
            checks.submission = "failed".to_string();
            issues.push(CheckMessage {
                severity: "error".to_string(),
                message: blocked.to_string(),
                row: Some(blocked.first_image_index),
            });
        }

        // Selections must resolve against the catalog
        for (index, variant) in draft.variants.iter().enumerate() {
            if let Some(color_id) = &variant.color_id {
                if !catalog.contains_active(color_id) {
                    checks.catalog = "warning".to_string();
                    issues.push(CheckMessage {
                        severity: "warning".to_string(),
                        message: format!(
                            "Variant '{}' uses color '{}' which is not an active catalog color",
                            variant.size, color_id
                        ),
                        row: Some(index),
                    });
                }
            }
        }

        // Apply fixes: adopt the recomputed rows and save
        let mut fixed = 0;
        if self.fix && !outcome.cleared.is_empty() {
            fixed = outcome.cleared.len();
            draft.images = scratch;
            draft.touch();
            DraftService::save(&draft, &self.draft)
                .map_err(|e| CliError::io(format!("Failed to save fixed draft: {e:#}")))?;
            checks.image_colors = "fixed".to_string();
        }

        // Image-color errors count as resolved once fixed; the submission
        // precondition never auto-fixes
        let error_count = issues.iter().filter(|m| m.severity == "error").count();
        let remaining_errors = error_count - fixed;

        let response = CheckResponse {
            consistent: remaining_errors == 0,
            available_colors: outcome.available.iter().map(String::from).collect(),
            issues,
            checks,
            fixed,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            Self::print_human(&response);
        }

        if !response.consistent {
            return Err(CliError::validation("Draft has consistency errors"));
        }

        if self.strict {
            let has_warnings = response.issues.iter().any(|m| m.severity == "warning");
            if has_warnings {
                return Err(CliError::validation("Warnings found in strict mode"));
            }
        }

        Ok(())
    }

    /// Human-readable report
    fn print_human(response: &CheckResponse) {
        if response.consistent {
            println!("✓ Draft is consistent");
        } else {
            println!("✗ Draft has consistency errors");
        }

        if response.available_colors.is_empty() {
            println!("\nAvailable colors: (none)");
        } else {
            println!("\nAvailable colors: {}", response.available_colors.join(", "));
        }

        println!("\nChecks:");
        println!("  Image colors: {}", response.checks.image_colors);
        println!("  Submission:   {}", response.checks.submission);
        println!("  Catalog:      {}", response.checks.catalog);

        if response.fixed > 0 {
            println!("\nCleared {} image color tag(s)", response.fixed);
        }

        if !response.issues.is_empty() {
            println!("\nIssues:");
            for msg in &response.issues {
                let prefix = if msg.severity == "error" {
                    "  ✗"
                } else {
                    "  ⚠"
                };
                if let Some(row) = msg.row {
                    println!("{} [row {}] {}", prefix, row, msg.message);
                } else {
                    println!("{} {}", prefix, msg.message);
                }
            }
        }
    }
}
