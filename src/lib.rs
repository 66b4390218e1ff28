//! table_export library: snapshot one SQLite table as indented JSON
//!
//! The export is one linear pass: open the database read-only, read the
//! table's column metadata, read every row, reshape rows into records keyed
//! by column name, and write the document to a file.
//!
//! # Example
//!
//! ```no_run
//! use table_export::{run_export, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     table: "todos".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(&config.export_options()).await?;
//! println!("Exported {} rows to {}", report.row_count, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. A current-thread runtime is enough;
//! nothing is spawned.

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{
    ConnectionError, ExportError, InitializationError, QueryError, SchemaError, WriteError,
};
pub use export::{BlobEncoding, ExportDocument, ExportOptions, Record, RowOrder};
pub use run::{run_export, ExportReport};

// Internal run module (contains the export pipeline)
mod run {
    use std::path::PathBuf;

    use log::{info, warn};
    use sqlx::sqlite::SqliteConnection;

    use crate::error_handling::ExportError;
    use crate::export::{build_document, write_document, ExportOptions, RowOrder};
    use crate::storage::{
        close_connection, open_connection, primary_key_columns, read_columns, read_rows,
    };

    /// Summary of a finished export.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ExportReport {
        /// Exported table
        pub table: String,
        /// Number of columns in the document
        pub column_count: usize,
        /// Number of rows in the document
        pub row_count: usize,
        /// File the document was written to
        pub output_path: PathBuf,
    }

    /// Exports one table to a JSON file.
    ///
    /// The connection opened here is closed before returning on every path,
    /// including when a later step fails. Nothing is written unless every
    /// read step succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; see `ExportError`.
    pub async fn run_export(opts: &ExportOptions) -> Result<ExportReport, ExportError> {
        let mut conn = open_connection(&opts.db_path).await?;

        let result = export_with_connection(&mut conn, opts).await;
        close_connection(conn).await;

        let report = result?;
        info!(
            "Exported {} row(s) x {} column(s) from '{}' to {}",
            report.row_count,
            report.column_count,
            report.table,
            report.output_path.display()
        );
        Ok(report)
    }

    async fn export_with_connection(
        conn: &mut SqliteConnection,
        opts: &ExportOptions,
    ) -> Result<ExportReport, ExportError> {
        let descriptors = read_columns(conn, &opts.table).await?;
        info!(
            "Table '{}' has {} column(s)",
            opts.table,
            descriptors.len()
        );

        let order_by = match opts.order {
            RowOrder::Natural => Vec::new(),
            RowOrder::PrimaryKey => {
                let keys = primary_key_columns(&descriptors);
                if keys.is_empty() {
                    warn!(
                        "Table '{}' has no declared primary key; rows keep storage order",
                        opts.table
                    );
                }
                keys
            }
        };

        let columns: Vec<String> = descriptors.iter().map(|c| c.name.clone()).collect();
        let rows = read_rows(conn, &opts.table, &columns, &order_by).await?;

        let document = build_document(&opts.table, columns, rows, opts.blob_encoding)?;
        write_document(&document, &opts.output)?;

        Ok(ExportReport {
            table: document.table,
            column_count: document.columns.len(),
            row_count: document.row_count,
            output_path: opts.output.clone(),
        })
    }
}
