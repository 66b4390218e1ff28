//! Row reading with dynamically typed cells.
//!
//! SQLite types values per cell, not per column, so each cell is decoded by
//! the storage class of the value it actually holds.

use log::{debug, info};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Row, TypeInfo, ValueRef};

use crate::error_handling::QueryError;

/// A single cell as stored by SQLite.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Quotes an SQL identifier with double quotes, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Builds the row query for `table`.
///
/// With an empty `order_by` no ORDER BY clause is added and rows come back
/// in whatever order the storage engine yields them.
pub fn build_select(table: &str, order_by: &[&str]) -> String {
    let mut sql = format!("SELECT * FROM {}", quote_identifier(table));
    if !order_by.is_empty() {
        let keys: Vec<String> = order_by.iter().map(|c| quote_identifier(c)).collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));
    }
    sql
}

/// Reads every row of `table`, each as one `CellValue` per column.
///
/// `columns` are the names from the schema step; every row must have exactly
/// that many cells.
///
/// # Errors
///
/// `QueryError::Fetch` on storage failure, `QueryError::Decode` if a cell
/// cannot be decoded, `QueryError::Width` if a row does not match `columns`.
pub async fn read_rows(
    conn: &mut SqliteConnection,
    table: &str,
    columns: &[String],
    order_by: &[&str],
) -> Result<Vec<Vec<CellValue>>, QueryError> {
    let sql = build_select(table, order_by);
    debug!("Row query: {sql}");

    let rows = sqlx::query(&sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| QueryError::Fetch {
            table: table.to_string(),
            source: e,
        })?;

    let decoded = rows
        .iter()
        .map(|row| decode_row(row, columns))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Read {} row(s) from '{table}'", decoded.len());
    Ok(decoded)
}

fn decode_row(row: &SqliteRow, columns: &[String]) -> Result<Vec<CellValue>, QueryError> {
    if row.len() != columns.len() {
        return Err(QueryError::Width {
            expected: columns.len(),
            found: row.len(),
        });
    }
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| decode_cell(row, index, column))
        .collect()
}

fn decode_cell(row: &SqliteRow, index: usize, column: &str) -> Result<CellValue, QueryError> {
    let decode_err = |e: sqlx::Error| QueryError::Decode {
        column: column.to_string(),
        source: e,
    };

    let raw = row.try_get_raw(index).map_err(decode_err)?;
    if raw.is_null() {
        return Ok(CellValue::Null);
    }
    // Non-null values report their runtime storage class, not the declared type
    let storage_class = raw.type_info().name().to_string();

    match storage_class.as_str() {
        "INTEGER" => row.try_get::<i64, _>(index).map(CellValue::Integer),
        "REAL" => row.try_get::<f64, _>(index).map(CellValue::Real),
        "BLOB" => row.try_get::<Vec<u8>, _>(index).map(CellValue::Blob),
        _ => row.try_get::<String, _>(index).map(CellValue::Text),
    }
    .map_err(decode_err)
}
