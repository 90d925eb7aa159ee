//! Color catalog listing command.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::models::ColorCatalog;

/// List the color catalog
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Include inactive colors
    #[arg(long)]
    pub all: bool,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = ColorCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load color catalog: {e:#}")))?;

        if self.json {
            let colors: Vec<_> = catalog
                .colors
                .iter()
                .filter(|c| self.all || c.active)
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&colors)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for choice in &catalog.colors {
            if !self.all && !choice.active {
                continue;
            }

            let swatch = choice.swatch.as_deref().unwrap_or("   --  ");
            let family = choice.family.as_deref().unwrap_or("-");
            let status = if choice.active { "" } else { "  (inactive)" };
            println!(
                "{:<16} {:<20} {:<8} {}{}",
                choice.id, choice.name, swatch, family, status
            );
        }

        Ok(())
    }
}
