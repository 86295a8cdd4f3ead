//! Error types for template import and serialization.

use thiserror::Error;

/// Errors from loading or serializing a sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Template bytes are not a readable xlsx workbook.
    #[error("failed to open template workbook: {0}")]
    Template(#[from] calamine::XlsxError),

    /// Workbook contains no worksheets.
    #[error("template workbook has no worksheets")]
    NoWorksheet,

    /// Serialization to xlsx bytes failed.
    #[error("failed to serialize workbook: {0}")]
    Writer(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
