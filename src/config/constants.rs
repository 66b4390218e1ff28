//! Configuration constants.
//!
//! Defaults used by the CLI and by `Config::default()`.

/// Database file exported when `--db-path` is not given.
pub const DEFAULT_DB_PATH: &str = "todos.db";

/// Table exported when `--table` is not given.
pub const DEFAULT_TABLE: &str = "todos";

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "todos_data.json";

/// Log modules that are capped below the application's own level.
/// sqlx logs every statement at `info`.
pub const NOISY_LOG_MODULES: &[&str] = &["sqlx"];
