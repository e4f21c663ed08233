// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File operation failed for {}: {source}", path.display())]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Library error: {0}")]
    Library(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
