//! Template import from xlsx bytes.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use preop_map::CellRef;
use tracing::debug;

use crate::error::{Result, SheetError};
use crate::sheet::Sheet;

/// Load the first worksheet of an xlsx workbook into a [`Sheet`].
///
/// Only cell text survives the import; styling and formulas belong to the
/// template file itself and are not modeled.
pub fn load_template(bytes: &[u8]) -> Result<Sheet> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoWorksheet)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)??;

    let mut sheet = Sheet::new(&name);
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    for (row_offset, row) in range.rows().enumerate() {
        for (col_offset, cell) in row.iter().enumerate() {
            let Some(text) = cell_text(cell) else {
                continue;
            };
            // calamine rows/cols are 0-based; the sheet model is 1-based.
            let row = start_row + row_offset as u32 + 1;
            let Ok(col) = u16::try_from(start_col as usize + col_offset + 1) else {
                continue;
            };
            sheet.set(CellRef::new(col, row), text);
        }
    }
    debug!(
        worksheet = %sheet.name(),
        cells = sheet.cell_count(),
        "template loaded"
    );
    Ok(sheet)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => None,
    }
}
