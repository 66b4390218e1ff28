//! Database connection management.
//!
//! Exports open a single read-only SQLite connection:
//! - The database file must already exist (it is never created)
//! - The connection is probed once so a non-database file fails here
//! - Closing is explicit so the caller controls when it happens

use std::path::Path;

use log::{debug, error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error_handling::ConnectionError;

/// Opens a read-only connection to an existing SQLite database file.
///
/// # Errors
///
/// - `ConnectionError::NotFound` if nothing exists at `db_path`
/// - `ConnectionError::Open` if SQLite cannot open the file
/// - `ConnectionError::InvalidDatabase` if the file is not a SQLite database
pub async fn open_connection(db_path: &Path) -> Result<SqliteConnection, ConnectionError> {
    if !db_path.is_file() {
        error!("Database file not found: {}", db_path.display());
        return Err(ConnectionError::NotFound(db_path.to_path_buf()));
    }

    let mut conn = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false)
        .connect()
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            ConnectionError::Open {
                path: db_path.to_path_buf(),
                source: e,
            }
        })?;

    // SQLite opens lazily; reading the schema table forces the header check
    if let Err(e) = sqlx::query("SELECT count(*) FROM sqlite_master")
        .fetch_one(&mut conn)
        .await
    {
        error!("{} is not a readable database: {e}", db_path.display());
        close_connection(conn).await;
        return Err(ConnectionError::InvalidDatabase {
            path: db_path.to_path_buf(),
            source: e,
        });
    }

    info!("Opened database {} (read-only)", db_path.display());
    Ok(conn)
}

/// Closes a connection, logging instead of failing if the close itself errors.
///
/// Closing happens after the export result is already decided, so a close
/// failure must not replace it.
pub async fn close_connection(conn: SqliteConnection) {
    match conn.close().await {
        Ok(()) => debug!("Database connection closed"),
        Err(e) => warn!("Failed to close database connection cleanly: {e}"),
    }
}
