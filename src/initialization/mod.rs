//! Application initialization.
//!
//! Only the logger needs process-wide setup; the database connection is
//! owned by each export run.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
