//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DB_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_TABLE};
use crate::export::{BlobEncoding, ExportOptions, RowOrder};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid --{}: {}", self.field.replace('_', "-"), self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Command-line configuration.
///
/// Every option has a default, so running the binary with no arguments
/// exports table `todos` from `todos.db` into `todos_data.json`.
///
/// # Examples
///
/// ```no_run
/// use table_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("app.db"),
///     table: "users".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "table_export",
    about = "Export a single SQLite table to an indented JSON file"
)]
pub struct Config {
    /// SQLite database file to read
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Name of the table to export
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// JSON file to write (overwritten if it exists)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// How BLOB cells are written
    #[arg(long, value_enum, default_value_t = BlobEncoding::Base64)]
    pub blob_encoding: BlobEncoding,

    /// Row order of the `data` array
    #[arg(long, value_enum, default_value_t = RowOrder::Natural)]
    pub order_by: RowOrder,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table: DEFAULT_TABLE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            blob_encoding: BlobEncoding::Base64,
            order_by: RowOrder::Natural,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.table.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "table",
                message: "table name must not be empty".to_string(),
            });
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "output",
                message: "output path must not be empty".to_string(),
            });
        }
        if self.output.is_dir() {
            return Err(ConfigValidationError {
                field: "output",
                message: format!(
                    "{} is a directory; pass a file path such as {}/{}",
                    self.output.display(),
                    self.output.display(),
                    DEFAULT_OUTPUT_PATH
                ),
            });
        }
        Ok(())
    }

    /// Builds the library options for this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            db_path: self.db_path.clone(),
            table: self.table.clone(),
            output: self.output.clone(),
            blob_encoding: self.blob_encoding,
            order: self.order_by,
        }
    }
}
