//! Fixed header and signature cells of the form.
//!
//! The top of the sheet (rows 5-9) carries the vehicle and driver data; the
//! signature blocks sit below the item grid (rows 93-95). These addresses
//! are the single source of truth for every non-grid write.

use preop_model::{FuelType, LicenseCategory};

use crate::cell::CellRef;

/// Named single-value header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Plate,
    Driver,
    City,
    VehicleType,
    Brand,
    Model,
    Odometer,
    MonthYear,
    LicenseExpiry,
    SotaExpiry,
    RtmExpiry,
    PolicyExpiry,
}

/// Cell for a named header field.
pub fn header_cell(field: HeaderField) -> CellRef {
    let a1 = match field {
        HeaderField::Plate => "C5",
        HeaderField::Driver => "C6",
        HeaderField::City => "C7",
        HeaderField::VehicleType => "J5",
        HeaderField::Brand => "J6",
        HeaderField::Model => "J7",
        HeaderField::Odometer => "Q5",
        HeaderField::MonthYear => "Q6",
        HeaderField::LicenseExpiry => "S8",
        HeaderField::SotaExpiry => "C9",
        HeaderField::RtmExpiry => "J9",
        HeaderField::PolicyExpiry => "Q9",
    };
    lookup(a1)
}

/// Checkbox cell for a fuel type (single-select group on row 5).
pub fn fuel_cell(fuel: FuelType) -> CellRef {
    let a1 = match fuel {
        FuelType::Gasolina => "T5",
        FuelType::Diesel => "U5",
        FuelType::Gas => "V5",
        FuelType::Electrico => "W5",
    };
    lookup(a1)
}

/// Checkbox cell for a license category (multi-select group on row 8).
pub fn license_cell(category: LicenseCategory) -> CellRef {
    let a1 = match category {
        LicenseCategory::A1 => "J8",
        LicenseCategory::A2 => "K8",
        LicenseCategory::B1 => "L8",
        LicenseCategory::B2 => "M8",
        LicenseCategory::B3 => "N8",
        LicenseCategory::C1 => "O8",
        LicenseCategory::C2 => "P8",
        LicenseCategory::C3 => "Q8",
    };
    lookup(a1)
}

/// The two signature slots on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureSlot {
    Driver,
    SafetyOfficer,
}

/// Cells of one signature block: full name, id number, signed-at display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureCells {
    pub full_name: CellRef,
    pub id_number: CellRef,
    pub signed_at: CellRef,
}

/// Cells for a signature slot.
pub fn signature_cells(slot: SignatureSlot) -> SignatureCells {
    match slot {
        SignatureSlot::Driver => SignatureCells {
            full_name: lookup("E93"),
            id_number: lookup("E94"),
            signed_at: lookup("E95"),
        },
        SignatureSlot::SafetyOfficer => SignatureCells {
            full_name: lookup("N93"),
            id_number: lookup("N94"),
            signed_at: lookup("N95"),
        },
    }
}

fn lookup(a1: &str) -> CellRef {
    // All inputs are literals above; a parse failure is a table defect.
    let cell = CellRef::parse(a1);
    debug_assert!(cell.is_some(), "bad header cell literal {a1}");
    cell.unwrap_or(CellRef { col: 1, row: 1 })
}

#[cfg(test)]
mod tests {
    use preop_model::{FuelType, LicenseCategory};

    use super::{
        HeaderField, SignatureSlot, fuel_cell, header_cell, license_cell, signature_cells,
    };

    #[test]
    fn header_cells_stay_clear_of_the_item_grid() {
        // Item rows span 14..=91; the date header sits on row 11. The top
        // header lives on rows 5-9, so the parse fallback (A1) fails here.
        for field in [
            HeaderField::Plate,
            HeaderField::Driver,
            HeaderField::City,
            HeaderField::VehicleType,
            HeaderField::Brand,
            HeaderField::Model,
            HeaderField::Odometer,
            HeaderField::MonthYear,
            HeaderField::LicenseExpiry,
            HeaderField::SotaExpiry,
            HeaderField::RtmExpiry,
            HeaderField::PolicyExpiry,
        ] {
            assert!((5..=9).contains(&header_cell(field).row));
        }
        for fuel in FuelType::ALL {
            assert_eq!(fuel_cell(fuel).row, 5);
        }
        for category in LicenseCategory::ALL {
            assert_eq!(license_cell(category).row, 8);
        }
        for slot in [SignatureSlot::Driver, SignatureSlot::SafetyOfficer] {
            let cells = signature_cells(slot);
            assert!(cells.full_name.row > 91);
            assert!(cells.id_number.row > 91);
            assert!(cells.signed_at.row > 91);
        }
    }

    #[test]
    fn checkbox_groups_use_distinct_cells() {
        let mut seen = std::collections::BTreeSet::new();
        for fuel in FuelType::ALL {
            assert!(seen.insert(fuel_cell(fuel)));
        }
        for category in LicenseCategory::ALL {
            assert!(seen.insert(license_cell(category)));
        }
    }
}
