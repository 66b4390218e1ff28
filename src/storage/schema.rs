//! Table column metadata.

use log::debug;
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;

use crate::error_handling::SchemaError;

/// One column descriptor from `pragma_table_xinfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Position in the table definition (0-based)
    pub cid: i64,
    pub name: String,
    /// Declared type as written in the DDL, empty if none
    pub decl_type: String,
    pub not_null: bool,
    /// 1-based position within the primary key, 0 if not part of it
    pub pk: i64,
}

/// Reads the column descriptors of `table` in table-defined order.
///
/// The table name is bound as a parameter, so no quoting is needed here.
/// Generated columns are included and virtual-table hidden columns are not,
/// matching the columns `SELECT *` returns.
///
/// # Errors
///
/// `SchemaError::TableNotFound` when the table has no columns (SQLite
/// returns an empty result for unknown tables), `SchemaError::Metadata` when
/// the query fails.
pub async fn read_columns(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<Vec<ColumnInfo>, SchemaError> {
    let rows = sqlx::query(
        "SELECT cid, name, type, \"notnull\", pk FROM pragma_table_xinfo(?)
         WHERE hidden <> 1 ORDER BY cid",
    )
    .bind(table)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| SchemaError::Metadata {
        table: table.to_string(),
        source: e,
    })?;

    if rows.is_empty() {
        return Err(SchemaError::TableNotFound(table.to_string()));
    }

    let columns = rows
        .iter()
        .map(|row| -> Result<ColumnInfo, sqlx::Error> {
            Ok(ColumnInfo {
                cid: row.try_get("cid")?,
                name: row.try_get("name")?,
                decl_type: row.try_get("type")?,
                not_null: row.try_get::<i64, _>("notnull")? != 0,
                pk: row.try_get("pk")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| SchemaError::Metadata {
            table: table.to_string(),
            source: e,
        })?;

    debug!("Column descriptors for '{table}': {columns:?}");
    Ok(columns)
}

/// Primary-key column names in key order.
///
/// Empty when the table declares no primary key.
pub fn primary_key_columns(columns: &[ColumnInfo]) -> Vec<&str> {
    let mut keyed: Vec<&ColumnInfo> = columns.iter().filter(|c| c.pk > 0).collect();
    keyed.sort_by_key(|c| c.pk);
    keyed.into_iter().map(|c| c.name.as_str()).collect()
}
