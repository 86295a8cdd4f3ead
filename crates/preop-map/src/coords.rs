//! The coordinate table for the checklist grid.
//!
//! Pure configuration, loaded once and read-only for the process lifetime.
//! Row numbers skip section heading rows, so item ids and rows are not a
//! simple offset of each other.

use std::collections::HashMap;
use std::sync::LazyLock;

use preop_model::ItemStatus;

use crate::cell::CellRef;
use crate::day::DayBlock;

/// Literal token written into a status cell when that status is selected.
pub const MARK: &str = "X";

/// Row of the weekly date header.
const DATE_HEADER_ROW: u32 = 11;

/// Item id to sheet row.
static ITEM_ROWS: LazyLock<HashMap<u16, u32>> = LazyLock::new(|| {
    let pairs: [(u16, u32); 66] = [
        (1, 14),
        (2, 15),
        (3, 17),
        (4, 18),
        (5, 19),
        (6, 21),
        (7, 22),
        (8, 23),
        (9, 24),
        (10, 25),
        (11, 27),
        (12, 28),
        (13, 29),
        (14, 30),
        (15, 31),
        (16, 32),
        (17, 34),
        (18, 35),
        (19, 36),
        (20, 37),
        (21, 39),
        (22, 40),
        (23, 41),
        (24, 42),
        (25, 43),
        (26, 44),
        (27, 45),
        (28, 46),
        (29, 47),
        (30, 48),
        (31, 49),
        (32, 50),
        (33, 51),
        (34, 52),
        (35, 53),
        (36, 55),
        (37, 56),
        (38, 58),
        (39, 59),
        (40, 60),
        (41, 61),
        (42, 63),
        (43, 64),
        (44, 65),
        (45, 66),
        (46, 67),
        (47, 68),
        (48, 70),
        (49, 71),
        (50, 72),
        (51, 73),
        (52, 74),
        (53, 75),
        (54, 76),
        (55, 78),
        (56, 79),
        (57, 80),
        (58, 81),
        (59, 82),
        (60, 84),
        (61, 85),
        (62, 86),
        (63, 88),
        (64, 89),
        (65, 90),
        (66, 91),
    ];
    pairs.into_iter().collect()
});

/// The three status columns of one day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumns {
    pub compliant: u16,
    pub non_compliant: u16,
    pub not_applicable: u16,
}

/// The three status cells for one item in one day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCells {
    pub compliant: CellRef,
    pub non_compliant: CellRef,
    pub not_applicable: CellRef,
}

impl StatusCells {
    /// All three cells, in form order (C, NC, NA).
    pub fn all(&self) -> [CellRef; 3] {
        [self.compliant, self.non_compliant, self.not_applicable]
    }

    /// The cell holding the mark for a given status.
    pub fn cell_for(&self, status: ItemStatus) -> CellRef {
        match status {
            ItemStatus::Compliant => self.compliant,
            ItemStatus::NonCompliant => self.non_compliant,
            ItemStatus::NotApplicable => self.not_applicable,
        }
    }
}

/// Sheet row for an item id, if the item is mapped.
pub fn item_row(item_id: u16) -> Option<u32> {
    ITEM_ROWS.get(&item_id).copied()
}

/// Status column triple for a day block. Defined for every block.
///
/// Monday starts at column E; each block occupies three adjacent columns.
pub fn day_columns(block: DayBlock) -> DayColumns {
    let first = 5 + u16::from(block.ordinal()) * 3;
    DayColumns {
        compliant: first,
        non_compliant: first + 1,
        not_applicable: first + 2,
    }
}

/// Header cell holding the date of a day block (row 11).
pub fn date_header_cell(block: DayBlock) -> CellRef {
    CellRef::new(day_columns(block).compliant, DATE_HEADER_ROW)
}

/// The three status cells for `(item, block)`, or `None` if the item is
/// not in the row map.
pub fn status_cells(item_id: u16, block: DayBlock) -> Option<StatusCells> {
    let row = item_row(item_id)?;
    let cols = day_columns(block);
    Some(StatusCells {
        compliant: CellRef::new(cols.compliant, row),
        non_compliant: CellRef::new(cols.non_compliant, row),
        not_applicable: CellRef::new(cols.not_applicable, row),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use preop_model::ItemStatus;

    use super::{date_header_cell, day_columns, item_row, status_cells};
    use crate::cell::{CellRef, col_letters};
    use crate::day::DayBlock;

    #[test]
    fn day_columns_match_form_layout() {
        // LUNES E/F/G through DOMINGO W/X/Y.
        let expected = [
            ("E", "F", "G"),
            ("H", "I", "J"),
            ("K", "L", "M"),
            ("N", "O", "P"),
            ("Q", "R", "S"),
            ("T", "U", "V"),
            ("W", "X", "Y"),
        ];
        for (block, (c, nc, na)) in DayBlock::ALL.into_iter().zip(expected) {
            let cols = day_columns(block);
            assert_eq!(col_letters(cols.compliant), c);
            assert_eq!(col_letters(cols.non_compliant), nc);
            assert_eq!(col_letters(cols.not_applicable), na);
        }
    }

    #[test]
    fn date_header_cells_sit_on_row_11() {
        let cells: Vec<String> = DayBlock::ALL
            .into_iter()
            .map(|b| date_header_cell(b).to_string())
            .collect();
        assert_eq!(cells, ["E11", "H11", "K11", "N11", "Q11", "T11", "W11"]);
    }

    #[test]
    fn row_map_spot_checks() {
        assert_eq!(item_row(1), Some(14));
        assert_eq!(item_row(5), Some(19));
        assert_eq!(item_row(6), Some(21));
        assert_eq!(item_row(37), Some(56));
        assert_eq!(item_row(62), Some(86));
        assert_eq!(item_row(66), Some(91));
        assert_eq!(item_row(0), None);
        assert_eq!(item_row(9999), None);
    }

    #[test]
    fn row_map_covers_exactly_the_catalog() {
        let catalog_ids: BTreeSet<u16> = preop_model::item_ids().collect();
        let mapped_ids: BTreeSet<u16> = (1..=200).filter(|&id| item_row(id).is_some()).collect();
        assert_eq!(catalog_ids, mapped_ids);
    }

    #[test]
    fn status_cells_for_thursday() {
        let cells = status_cells(1, DayBlock::Jueves).expect("item 1 mapped");
        assert_eq!(cells.compliant, CellRef::parse("N14").expect("ref"));
        assert_eq!(cells.non_compliant, CellRef::parse("O14").expect("ref"));
        assert_eq!(cells.not_applicable, CellRef::parse("P14").expect("ref"));
        assert_eq!(
            cells.cell_for(ItemStatus::NotApplicable),
            CellRef::parse("P14").expect("ref")
        );
        assert_eq!(status_cells(9999, DayBlock::Jueves), None);
    }
}
