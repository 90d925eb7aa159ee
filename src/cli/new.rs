//! Draft scaffolding command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::models::ProductDraft;
use crate::services::drafts::{sanitize_filename, DraftService};

/// Create a new empty product draft file
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Product name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output file (defaults to <sanitized-name>.json in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let draft = ProductDraft::new(&self.name)
            .map_err(|e| CliError::usage(format!("Invalid product name: {e}")))?;

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", sanitize_filename(&self.name))));

        if path.exists() {
            return Err(CliError::usage(format!(
                "Refusing to overwrite existing file: {}",
                path.display()
            )));
        }

        DraftService::save(&draft, &path)
            .map_err(|e| CliError::io(format!("Failed to write draft: {e:#}")))?;

        println!("Created {}", path.display());
        Ok(())
    }
}
