//! Reshaping rows into records and assembling the export document.

use crate::error_handling::ExportError;
use crate::storage::CellValue;

use super::types::{BlobEncoding, ExportDocument, Record};

/// Pairs each column name with the cell at the same position.
///
/// Values are moved through unchanged.
pub fn build_record(columns: &[String], row: Vec<CellValue>) -> Record {
    Record::new(columns.iter().cloned().zip(row).collect())
}

/// Builds the document for `table` from its columns and rows.
///
/// `row_count` is taken from the records, so it always equals `data.len()`.
///
/// # Errors
///
/// `ExportError::BlobRejected` when `blob_encoding` is `Reject` and any cell
/// holds a BLOB.
pub fn build_document(
    table: &str,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    blob_encoding: BlobEncoding,
) -> Result<ExportDocument, ExportError> {
    if blob_encoding == BlobEncoding::Reject {
        reject_blobs(&columns, &rows)?;
    }

    let data: Vec<Record> = rows
        .into_iter()
        .map(|row| build_record(&columns, row))
        .collect();

    Ok(ExportDocument {
        table: table.to_string(),
        columns,
        row_count: data.len(),
        data,
    })
}

fn reject_blobs(columns: &[String], rows: &[Vec<CellValue>]) -> Result<(), ExportError> {
    for row in rows {
        if let Some(index) = row.iter().position(|v| matches!(v, CellValue::Blob(_))) {
            return Err(ExportError::BlobRejected {
                column: columns[index].clone(),
            });
        }
    }
    Ok(())
}
