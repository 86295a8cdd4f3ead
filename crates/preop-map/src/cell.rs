//! A1-style cell references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single cell address, 1-based in both dimensions (`A1` is column 1, row 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub col: u16,
    pub row: u32,
}

impl CellRef {
    pub fn new(col: u16, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse an A1 reference such as `E11` or `AA3`.
    pub fn parse(s: &str) -> Option<Self> {
        let letters: String = s.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
        let digits = &s[letters.len()..];
        if letters.is_empty() || digits.is_empty() {
            return None;
        }
        let col = col_index(&letters)?;
        let row: u32 = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(Self { col, row })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_letters(self.col), self.row)
    }
}

impl FromStr for CellRef {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

/// Column letters to 1-based index (`A` = 1, `Z` = 26, `AA` = 27).
pub fn col_index(letters: &str) -> Option<u16> {
    let mut result: u32 = 0;
    for c in letters.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        result = result * 26 + (c as u32 - 'A' as u32 + 1);
    }
    u16::try_from(result).ok().filter(|&n| n > 0)
}

/// 1-based column index to letters.
pub fn col_letters(mut index: u16) -> String {
    let mut letters = String::new();
    while index > 0 {
        index -= 1;
        letters.insert(0, (b'A' + (index % 26) as u8) as char);
        index /= 26;
    }
    letters
}
