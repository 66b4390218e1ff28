//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and table name
//! - CLI option types and parsing
//! - Validation of user-supplied configuration

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
