//! Export types and options.

use std::path::PathBuf;

use base64::Engine;
use clap::ValueEnum;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::storage::CellValue;

/// How BLOB cells are written, since JSON has no binary type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BlobEncoding {
    /// Standard padded base64 string
    Base64,
    /// Fail the export when a BLOB cell is found
    Reject,
}

/// Row order of the exported `data` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RowOrder {
    /// No ORDER BY: whatever order SQLite returns
    Natural,
    /// ORDER BY the declared primary key, storage order if there is none
    PrimaryKey,
}

/// Options for exporting a table.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Table to export
    pub table: String,
    /// Output file path, replaced if it exists
    pub output: PathBuf,
    /// BLOB rendering
    pub blob_encoding: BlobEncoding,
    /// Row ordering
    pub order: RowOrder,
}

/// One row keyed by column name.
///
/// Keys keep column order when serialized so repeated exports are
/// byte-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub(crate) fn new(fields: Vec<(String, CellValue)>) -> Self {
        Self { fields }
    }

    /// Value stored under `column`, if it is one of the record's keys.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for CellValue {
    /// JSON has no NaN or infinity; serde_json writes non-finite reals as `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Real(f) => serializer.serialize_f64(*f),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Blob(bytes) => serializer
                .serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes)),
        }
    }
}

/// The complete exported snapshot of one table.
///
/// Field order here is the key order of the output file.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub table: String,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub data: Vec<Record>,
}
