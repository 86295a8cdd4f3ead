//! Projection and export engine for weekly inspection records.
//!
//! Data flows one way: saved daily records are grouped by vehicle and week,
//! projected onto the spreadsheet template cell by cell, then serialized to
//! an output artifact (xlsx directly, or pdf via the remote renderer).

pub mod dates;
pub mod error;
pub mod export;
pub mod project;

pub use dates::{block_for, format_day, month_year_label, week_id, week_monday};
pub use error::{ExportError, Result};
pub use export::{ExportArtifact, ExportMode, Renderer, export_pdf, export_xlsx, select_records};
pub use project::project;
