//! Sparse in-memory worksheet.
//!
//! The template is opaque beyond addressed cells, so the model is a plain
//! map from cell address to text. Clearing a cell removes the entry; empty
//! cells are never stored.

use std::collections::BTreeMap;

use preop_map::CellRef;

/// A single worksheet as a sparse map of text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u16), String>,
}

impl Sheet {
    /// New empty sheet with a worksheet name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write text into a cell, replacing any previous content.
    pub fn set(&mut self, at: CellRef, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(at.row, at.col));
        } else {
            self.cells.insert((at.row, at.col), value);
        }
    }

    /// Remove a cell's content.
    pub fn clear(&mut self, at: CellRef) {
        self.cells.remove(&(at.row, at.col));
    }

    /// Read a cell, `None` when empty.
    pub fn get(&self, at: CellRef) -> Option<&str> {
        self.cells.get(&(at.row, at.col)).map(String::as_str)
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate non-empty cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &str)> {
        self.cells
            .iter()
            .map(|(&(row, col), value)| (CellRef::new(col, row), value.as_str()))
    }
}
