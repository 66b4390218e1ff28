//! Error handling.
//!
//! Error kinds follow the export pipeline:
//! - **Connection**: the database file cannot be opened
//! - **Schema**: the table or its column metadata is unavailable
//! - **Query**: rows cannot be read or decoded
//! - **Write**: the output file cannot be written
//!
//! Nothing is retried. Every error aborts the run and is reported by `main`.

mod types;

// Re-export public API
pub use types::{
    ConnectionError, ExportError, InitializationError, QueryError, SchemaError, WriteError,
};
