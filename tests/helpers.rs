// Shared test helpers for database setup and export options.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

use table_export::{BlobEncoding, ExportOptions, RowOrder};

/// Creates a database file at `db_path` and runs `statements` against it.
/// The pool is closed before returning so the exporter sees a quiet file.
#[allow(dead_code)] // Used by other test files
pub async fn create_db(db_path: &Path, statements: &[&str]) {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database");

    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to run setup statement");
    }
    pool.close().await;
}

/// The `todos` fixture with two rows.
#[allow(dead_code)] // Used by other test files
pub async fn create_todos_db(db_path: &Path) {
    create_db(
        db_path,
        &[
            "CREATE TABLE todos (id INTEGER, title TEXT, done INTEGER)",
            "INSERT INTO todos VALUES (1, 'Buy milk', 0)",
            "INSERT INTO todos VALUES (2, 'Pay bills', 1)",
        ],
    )
    .await;
}

/// Export options with library defaults for the given paths and table.
#[allow(dead_code)] // Used by other test files
pub fn options(db_path: &Path, table: &str, output: &Path) -> ExportOptions {
    ExportOptions {
        db_path: db_path.to_path_buf(),
        table: table.to_string(),
        output: output.to_path_buf(),
        blob_encoding: BlobEncoding::Base64,
        order: RowOrder::Natural,
    }
}

/// Reads and parses an exported file.
#[allow(dead_code)] // Used by other test files
pub fn read_json(path: &PathBuf) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&contents).expect("Output should be valid JSON")
}
