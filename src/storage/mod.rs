// storage/mod.rs
// Database access: connection lifecycle, column metadata, row reading

pub mod connection;
pub mod rows;
pub mod schema;

// Re-export commonly used items
pub use connection::{close_connection, open_connection};
pub use rows::{build_select, quote_identifier, read_rows, CellValue};
pub use schema::{primary_key_columns, read_columns, ColumnInfo};
