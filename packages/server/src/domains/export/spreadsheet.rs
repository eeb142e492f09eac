//! Spreadsheet export of crawl results.
//!
//! The workbook is written to a named temp file which the returned
//! [`SpreadsheetExport`] owns. Turning the export into a body stream moves
//! that ownership into the stream, so the file is removed once the response
//! body has been sent or dropped.

use std::io;
use std::path::Path;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;
use tempfile::TempPath;
use tokio_util::io::ReaderStream;
use tracing::debug;

use super::ExportError;
use crate::domains::crawling::ResultRecord;

/// Attachment name offered to the browser.
pub const DOWNLOAD_FILE_NAME: &str = "instagram_crawling.xlsx";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column headers, in output order.
pub const COLUMNS: [&str; 5] = ["Platform", "URL", "Username", "Komentar", "Created At"];

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl From<Option<&String>> for Cell {
    fn from(value: Option<&String>) -> Self {
        value.map_or(Cell::Empty, |s| Cell::Text(s.clone()))
    }
}

/// Lay records out as rows matching [`COLUMNS`].
pub fn to_rows(records: &[ResultRecord]) -> Vec<[Cell; 5]> {
    records
        .iter()
        .map(|record| {
            [
                Cell::Text(record.platform.to_string()),
                Cell::from(record.post_url.as_ref()),
                Cell::from(record.username.as_ref()),
                Cell::from(record.comment.as_ref()),
                raw_timestamp_cell(record.created_at.as_ref()),
            ]
        })
        .collect()
}

// Raw value, unformatted: numbers stay numeric.
fn raw_timestamp_cell(value: Option<&Value>) -> Cell {
    match value {
        None | Some(Value::Null) => Cell::Empty,
        Some(Value::Number(n)) => n.as_f64().map_or(Cell::Empty, Cell::Number),
        Some(Value::String(s)) => Cell::Text(s.clone()),
        Some(other) => Cell::Text(other.to_string()),
    }
}

/// A fully written export file.
#[derive(Debug)]
pub struct SpreadsheetExport {
    path: TempPath,
    rows: usize,
}

impl SpreadsheetExport {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows, not counting the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Stream the file contents. The temp file lives until the stream is dropped.
    pub async fn into_stream(
        self,
    ) -> io::Result<impl Stream<Item = io::Result<Bytes>> + Send + 'static> {
        let file = tokio::fs::File::open(&self.path).await?;
        let path = self.path;
        Ok(ReaderStream::new(file).map(move |chunk| {
            let _keep_alive = &path;
            chunk
        }))
    }
}

/// Write records to a temp `.xlsx` file: one header row plus one row per record.
pub fn to_spreadsheet(records: &[ResultRecord]) -> Result<SpreadsheetExport, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    let rows = to_rows(records);
    for (i, row) in rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col as u16, text.as_str())?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row_num, col as u16, *number)?;
                }
                Cell::Empty => {}
            }
        }
    }

    let path = tempfile::Builder::new()
        .prefix("crawl-export-")
        .suffix(".xlsx")
        .tempfile()?
        .into_temp_path();
    workbook.save(&path)?;

    debug!(rows = rows.len(), path = %path.display(), "Spreadsheet written");
    Ok(SpreadsheetExport {
        path,
        rows: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(username: &str, created_at: Option<Value>) -> ResultRecord {
        ResultRecord {
            platform: "Instagram",
            post_url: Some("https://www.instagram.com/p/abc/".into()),
            username: Some(username.into()),
            comment: Some("keren".into()),
            created_at,
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(to_spreadsheet(&[]), Err(ExportError::EmptyInput)));
    }

    #[test]
    fn test_column_order() {
        assert_eq!(
            COLUMNS,
            ["Platform", "URL", "Username", "Komentar", "Created At"]
        );
    }

    #[test]
    fn test_row_cells_follow_columns() {
        let rows = to_rows(&[record("budi", Some(json!(1700000000)))]);

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            [
                Cell::Text("Instagram".into()),
                Cell::Text("https://www.instagram.com/p/abc/".into()),
                Cell::Text("budi".into()),
                Cell::Text("keren".into()),
                Cell::Number(1700000000.0),
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_empty_cells() {
        let rows = to_rows(&[ResultRecord {
            platform: "Instagram",
            post_url: None,
            username: None,
            comment: None,
            created_at: None,
        }]);
        assert_eq!(rows[0][1], Cell::Empty);
        assert_eq!(rows[0][4], Cell::Empty);
    }

    #[test]
    fn test_single_record_writes_xlsx() {
        let export = to_spreadsheet(&[record("budi", Some(json!("2024-03-01T10:00:00Z")))])
            .unwrap();

        assert_eq!(export.rows(), 1);
        assert_eq!(export.path().extension().unwrap(), "xlsx");

        let bytes = std::fs::read(export.path()).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let export = to_spreadsheet(&[record("budi", None)]).unwrap();
        let path = export.path().to_path_buf();
        assert!(path.exists());

        drop(export);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_stream_keeps_file_until_dropped() {
        let export = to_spreadsheet(&[record("budi", None)]).unwrap();
        let path = export.path().to_path_buf();

        let mut stream = Box::pin(export.into_stream().await.unwrap());
        assert!(path.exists());

        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(&body[..2], b"PK");

        drop(stream);
        assert!(!path.exists());
    }
}
