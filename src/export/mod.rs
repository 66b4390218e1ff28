//! Export functionality.
//!
//! This module turns the rows read from one SQLite table into an
//! `ExportDocument` and writes it as an indented JSON file.

mod document;
mod json;
mod types;

pub use document::{build_document, build_record};
pub use json::{render_document, write_document};
pub use types::{BlobEncoding, ExportDocument, ExportOptions, Record, RowOrder};
