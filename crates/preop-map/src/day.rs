//! Day-of-week blocks, Monday-first.
//!
//! All coordinate lookups use the Monday-first ordinal (0 = Monday..
//! 6 = Sunday). This is distinct from the Sunday-first numbering some date
//! sources use; the conversion between the two is fixed and total.

use serde::{Deserialize, Serialize};

/// A day slot on the weekly form, ordinal 0 (Monday) through 6 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayBlock {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl DayBlock {
    /// The seven blocks in form order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Lunes,
        Self::Martes,
        Self::Miercoles,
        Self::Jueves,
        Self::Viernes,
        Self::Sabado,
        Self::Domingo,
    ];

    /// Monday-first ordinal, 0..=6.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Block for a Monday-first ordinal. Total over 0..=6.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Block for a Sunday-first weekday number (0 = Sunday .. 6 = Saturday).
    ///
    /// Total over 0..=6: `1` maps to Monday, `0` maps to Sunday.
    pub fn from_sunday_first(native: u8) -> Option<Self> {
        match native {
            1 => Some(Self::Lunes),
            2 => Some(Self::Martes),
            3 => Some(Self::Miercoles),
            4 => Some(Self::Jueves),
            5 => Some(Self::Viernes),
            6 => Some(Self::Sabado),
            0 => Some(Self::Domingo),
            _ => None,
        }
    }

    /// Sunday-first weekday number for this block.
    pub fn to_sunday_first(self) -> u8 {
        match self {
            Self::Domingo => 0,
            other => other.ordinal() + 1,
        }
    }

    /// Uppercase Spanish day name as printed on the form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lunes => "LUNES",
            Self::Martes => "MARTES",
            Self::Miercoles => "MIERCOLES",
            Self::Jueves => "JUEVES",
            Self::Viernes => "VIERNES",
            Self::Sabado => "SABADO",
            Self::Domingo => "DOMINGO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DayBlock;

    #[test]
    fn sunday_first_mapping_is_exact() {
        // Fixed table: {1:0, 2:1, 3:2, 4:3, 5:4, 6:5, 0:6}
        let expected = [(1, 0), (2, 1), (3, 2), (4, 3), (5, 4), (6, 5), (0, 6)];
        for (native, ordinal) in expected {
            let block = DayBlock::from_sunday_first(native).expect("in-range weekday");
            assert_eq!(block.ordinal(), ordinal);
            assert_eq!(block.to_sunday_first(), native);
        }
        assert_eq!(DayBlock::from_sunday_first(7), None);
    }

    #[test]
    fn ordinal_round_trip() {
        for block in DayBlock::ALL {
            assert_eq!(DayBlock::from_ordinal(block.ordinal()), Some(block));
        }
        assert_eq!(DayBlock::from_ordinal(7), None);
    }
}
