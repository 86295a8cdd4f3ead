//! Vehicle catalog records, consumed read-only from the fleet dataset.

use serde::{Deserialize, Serialize};

/// One fleet vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub brand: String,
    /// Family or typology the fleet dataset groups the vehicle under.
    pub family: String,
    pub description: String,
}

/// Canonical form used for plate comparison: whitespace stripped, uppercased.
pub fn normalize_plate(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
