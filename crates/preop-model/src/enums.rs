//! Enumerated form values: item status, fuel type, license category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer for a single checklist item on a given day.
///
/// Serialized with the wire tokens used by the saved-record format
/// (`"C"`, `"NC"`, `"NA"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Item passed inspection.
    #[serde(rename = "C")]
    Compliant,
    /// Item failed inspection.
    #[serde(rename = "NC")]
    NonCompliant,
    /// Item does not apply to this vehicle.
    #[serde(rename = "NA")]
    NotApplicable,
}

impl ItemStatus {
    /// Short token as shown on the printed form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Compliant => "C",
            Self::NonCompliant => "NC",
            Self::NotApplicable => "NA",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Fuel type, a single-select checkbox group on the form header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Gasolina,
    Diesel,
    Gas,
    Electrico,
}

impl FuelType {
    pub const ALL: [Self; 4] = [Self::Gasolina, Self::Diesel, Self::Gas, Self::Electrico];
}

/// Driver license category, a multi-select checkbox group on the form header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LicenseCategory {
    A1,
    A2,
    B1,
    B2,
    B3,
    C1,
    C2,
    C3,
}

impl LicenseCategory {
    pub const ALL: [Self; 8] = [
        Self::A1,
        Self::A2,
        Self::B1,
        Self::B2,
        Self::B3,
        Self::C1,
        Self::C2,
        Self::C3,
    ];
}
