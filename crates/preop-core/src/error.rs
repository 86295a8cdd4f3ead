//! Error types for export operations.

use thiserror::Error;

/// Errors surfaced to the user by the export orchestrator.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No spreadsheet template has been loaded.
    #[error("no template loaded; load the xlsx template first")]
    MissingTemplate,

    /// No vehicle plate was given.
    #[error("no vehicle plate selected")]
    MissingPlate,

    /// The resolved record set was empty.
    #[error("nothing to export for {plate} ({scope})")]
    NothingToExport { plate: String, scope: String },

    /// Template import or workbook serialization failed.
    #[error(transparent)]
    Sheet(#[from] preop_xlsx::SheetError),

    /// The rendering collaborator failed; carries its message verbatim.
    #[error("{0}")]
    Render(String),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
