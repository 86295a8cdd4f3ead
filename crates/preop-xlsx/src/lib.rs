//! Spreadsheet plumbing for the inspection exporter.
//!
//! A pre-printed xlsx template is imported into a sparse [`Sheet`], mutated
//! cell by cell, and serialized back to xlsx bytes.

pub mod error;
pub mod export;
pub mod import;
pub mod sheet;

pub use error::{Result, SheetError};
pub use export::sheet_to_bytes;
pub use import::load_template;
pub use sheet::Sheet;
