//! Cell coordinates for the weekly pre-operational inspection form.
//!
//! Everything here is static lookup data: which sheet cell holds each
//! checklist mark, each day's date, and each header field. The table is
//! loaded once and read-only for the process lifetime.

pub mod cell;
pub mod coords;
pub mod day;
pub mod header;

pub use cell::{CellRef, col_index, col_letters};
pub use coords::{DayColumns, MARK, StatusCells, date_header_cell, day_columns, item_row, status_cells};
pub use day::DayBlock;
pub use header::{
    HeaderField, SignatureCells, SignatureSlot, fuel_cell, header_cell, license_cell,
    signature_cells,
};
