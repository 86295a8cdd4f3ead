//! Serialization of a [`Sheet`] to xlsx bytes.

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::error::Result;
use crate::sheet::Sheet;

/// Serialize a sheet to an xlsx workbook in memory.
pub fn sheet_to_bytes(sheet: &Sheet) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if !sheet.name().is_empty() {
        worksheet.set_name(sheet.name())?;
    }
    for (at, value) in sheet.iter() {
        // rust_xlsxwriter uses 0-based row/col.
        worksheet.write_string(at.row - 1, at.col - 1, value)?;
    }
    let bytes = workbook.save_to_buffer()?;
    debug!(cells = sheet.cell_count(), bytes = bytes.len(), "sheet serialized");
    Ok(bytes)
}
