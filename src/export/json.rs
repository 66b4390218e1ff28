//! JSON export functionality.
//!
//! Writes the export document as pretty-printed JSON (2-space indentation,
//! UTF-8, non-ASCII characters kept literal). The file is staged in a
//! temporary file in the destination directory and renamed over the output
//! path, so readers never see a half-written file.

use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error_handling::WriteError;

use super::types::ExportDocument;

/// Renders the document exactly as it is written to disk.
pub fn render_document(document: &ExportDocument) -> Result<Vec<u8>, WriteError> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Writes the document to `output`, replacing any existing file.
///
/// # Errors
///
/// `WriteError::Io` if the staging file cannot be created or written,
/// `WriteError::Persist` if it cannot be moved onto `output`.
pub fn write_document(document: &ExportDocument, output: &Path) -> Result<(), WriteError> {
    let bytes = render_document(document)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| WriteError::Io {
        path: output.to_path_buf(),
        source,
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    staged.write_all(&bytes).map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;

    staged.persist(output).map_err(|e| WriteError::Persist {
        path: output.to_path_buf(),
        source: e.error,
    })?;

    info!("Wrote {} byte(s) to {}", bytes.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::build_document;
    use crate::export::BlobEncoding;
    use crate::storage::CellValue;
    use tempfile::tempdir;

    fn sample() -> ExportDocument {
        build_document(
            "todos",
            vec!["id".to_string(), "title".to_string()],
            vec![vec![CellValue::Integer(1), CellValue::Text("Café ☕".to_string())]],
            BlobEncoding::Base64,
        )
        .expect("Should build")
    }

    #[test]
    fn test_render_uses_two_space_indent_and_literal_unicode() {
        let text = String::from_utf8(render_document(&sample()).unwrap()).unwrap();
        let expected = r#"{
  "table": "todos",
  "columns": [
    "id",
    "title"
  ],
  "row_count": 1,
  "data": [
    {
      "id": 1,
      "title": "Café ☕"
    }
  ]
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_data_renders_as_empty_array() {
        let doc = build_document("todos", vec!["id".to_string()], vec![], BlobEncoding::Base64)
            .expect("Should build");
        let text = String::from_utf8(render_document(&doc).unwrap()).unwrap();
        assert!(text.contains("\"row_count\": 0"));
        assert!(text.contains("\"data\": []"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("out.json");
        std::fs::write(&output, "stale contents that are longer than nothing").unwrap();

        write_document(&sample(), &output).expect("Should write");

        let written = std::fs::read(&output).unwrap();
        assert_eq!(written, render_document(&sample()).unwrap());
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "staging file should be renamed, not left behind");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("no_such_dir").join("out.json");

        let result = write_document(&sample(), &output);
        assert!(matches!(result, Err(WriteError::Io { .. })));
        assert!(!output.exists());
    }
}
