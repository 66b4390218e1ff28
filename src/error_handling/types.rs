//! Error type definitions.
//!
//! One enum per pipeline step, wrapped by `ExportError` at the library boundary.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// The database could not be opened.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// No file exists at the database path.
    #[error("database file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// SQLite refused to open the file.
    #[error("failed to open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// The file opened but is not a readable SQLite database.
    #[error("{} is not a valid SQLite database: {source}", .path.display())]
    InvalidDatabase {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
}

/// Column metadata for the table is unavailable.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The table has no column descriptors, i.e. it does not exist.
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    /// The metadata query itself failed.
    #[error("failed to read column metadata for table '{table}': {source}")]
    Metadata {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Reading rows from the table failed.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The row query failed at the storage level.
    #[error("failed to read rows from table '{table}': {source}")]
    Fetch {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// A row did not have one cell per schema column.
    #[error("row has {found} cell(s) but the table has {expected} column(s)")]
    Width { expected: usize, found: usize },

    /// A cell could not be decoded into its storage type.
    #[error("failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Writing the output file failed.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The temporary file next to the output could not be created or written.
    #[error("failed to write output file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be rendered as JSON.
    #[error("failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The finished temporary file could not replace the output path.
    #[error("failed to move output into place at {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Step 1: opening the database.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Step 2: reading column metadata.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Step 3: reading rows.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Step 4: a BLOB cell was found while blobs are rejected.
    #[error("column '{column}' holds a BLOB value and --blob-encoding is 'reject'")]
    BlobRejected { column: String },

    /// Step 6: writing the output file.
    #[error("I/O error: {0}")]
    Write(#[from] WriteError),
}
