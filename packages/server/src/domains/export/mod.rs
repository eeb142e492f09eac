//! Export domain - spreadsheet downloads and display formatting

pub mod error;
pub mod spreadsheet;
pub mod timestamp;

pub use error::ExportError;
pub use spreadsheet::{
    to_rows, to_spreadsheet, Cell, SpreadsheetExport, COLUMNS, DOWNLOAD_FILE_NAME,
    XLSX_CONTENT_TYPE,
};
pub use timestamp::{format_timestamp, format_timestamp_str, MISSING_TIMESTAMP};
