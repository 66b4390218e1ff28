//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `table_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use table_export::initialization::init_logger_with;
use table_export::{run_export, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("table_export error: {e}");
        process::exit(2);
    }

    match run_export(&config.export_options()).await {
        Ok(report) => {
            println!("Data saved to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("table_export error: {e}");
            process::exit(1);
        }
    }
}
