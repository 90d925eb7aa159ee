//! LazyCatalog - Terminal product catalog entry editor
//!
//! This application provides an interactive editor for product drafts,
//! keeping image color tags consistent with the colors the product's
//! variants actually use.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lazycatalog::cli::{CheckArgs, ColorsArgs, NewArgs};
use lazycatalog::config::Config;
use lazycatalog::constants::{APP_BINARY_NAME, APP_NAME};
use lazycatalog::services::DraftService;
use lazycatalog::tui;

/// LazyCatalog - Terminal product catalog entry editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a product draft JSON file
    #[arg(value_name = "FILE")]
    draft_path: Option<PathBuf>,

    /// Initialize configuration (create config file and drafts directory)
    #[arg(short, long)]
    init: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Headless subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a draft for color consistency issues
    Check(CheckArgs),
    /// List the color catalog
    Colors(ColorsArgs),
    /// Create a new empty product draft file
    New(NewArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless subcommands skip the banner and map errors to exit codes
    if let Some(command) = cli.command {
        let result = match command {
            Commands::Check(args) => args.execute(),
            Commands::Colors(args) => args.execute(),
            Commands::New(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal product catalog entry editor");
    println!();

    if cli.init {
        run_init()?;
        return Ok(());
    }

    if let Some(path) = cli.draft_path {
        // Validate the file path before attempting to load
        if !path.exists() {
            eprintln!("Error: Draft file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a product draft JSON file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} linen_shirt.json", APP_BINARY_NAME);
            eprintln!("  {} path/to/draft.json", APP_BINARY_NAME);
            eprintln!();
            eprintln!("To create a new draft, run:");
            eprintln!("  {} new \"Product Name\"", APP_BINARY_NAME);
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {} --help", APP_BINARY_NAME);
            std::process::exit(1);
        }

        // Check if the file has the expected extension
        if let Some(ext) = path.extension() {
            if ext != "json" {
                eprintln!(
                    "Warning: Expected a JSON draft file (.json), but got: {}",
                    path.display()
                );
                eprintln!();
            }
        }

        // Load the draft
        let draft = DraftService::load(&path)?;

        // Load or create default config
        let config = Config::load().unwrap_or_else(|_| Config::default());

        // Initialize TUI
        let mut terminal = tui::setup_terminal()?;
        let mut app_state = tui::AppState::new(draft, Some(path), config)?;

        // Run main TUI loop
        let result = tui::run_tui(&mut app_state, &mut terminal);

        // Restore terminal
        tui::restore_terminal(terminal)?;

        // Check for errors
        result?;
    } else {
        // No file argument provided - check if config exists
        if !Config::exists() {
            println!(
                "Welcome! It looks like this is your first time running {}.",
                APP_NAME
            );
            println!();
            run_init()?;
        } else {
            let config = Config::load().unwrap_or_else(|_| Config::default());
            let drafts_dir = config.drafts_dir()?;
            let drafts = DraftService::list_drafts(&drafts_dir)?;

            println!("No draft file specified.");
            println!();
            if drafts.is_empty() {
                println!("No drafts found in {}", drafts_dir.display());
                println!();
                println!("Create one with:");
                println!("  {} new \"Product Name\"", APP_BINARY_NAME);
            } else {
                println!("Drafts in {}:", drafts_dir.display());
                for draft in drafts {
                    if let Some(name) = draft.file_name() {
                        println!("  {}", name.to_string_lossy());
                    }
                }
                println!();
                println!("Open one with:");
                println!("  {} <FILE>", APP_BINARY_NAME);
            }
        }
    }

    Ok(())
}

/// Create the default config file and drafts directory.
fn run_init() -> Result<()> {
    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    if config.paths.drafts_dir.is_none() {
        config.paths.drafts_dir = Some(Config::default_drafts_dir()?);
    }
    config.save()?;

    let drafts_dir = config.drafts_dir()?;
    std::fs::create_dir_all(&drafts_dir)?;

    println!("Configuration written to {}", Config::config_file_path()?.display());
    println!("Drafts directory: {}", drafts_dir.display());
    Ok(())
}
