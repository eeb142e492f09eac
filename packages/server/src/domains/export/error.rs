use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    EmptyInput,

    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export file error: {0}")]
    Io(#[from] std::io::Error),
}
