//! Record projection onto the sheet model.
//!
//! Writes header fields, per-day dates, and per-item status marks into the
//! template sheet using the fixed coordinate table. Header consolidation is
//! last write wins; item marks always clear the day's three status cells
//! before setting the selected one, so re-projecting is idempotent and a
//! changed status never leaves a stale mark behind.

use preop_map::{
    HeaderField, MARK, SignatureSlot, date_header_cell, fuel_cell, header_cell, license_cell,
    signature_cells, status_cells,
};
use preop_model::{FuelType, InspectionRecord, LicenseCategory, SignatureBlock};
use preop_xlsx::Sheet;
use tracing::debug;

use crate::dates::{block_for, format_day, month_year_label};

/// Project a date-ordered record set onto the template sheet.
///
/// Unmapped item ids are skipped silently; a partial coordinate
/// configuration degrades to a partial export rather than an error.
pub fn project(sheet: &mut Sheet, records: &[InspectionRecord]) {
    let Some(last) = records.last() else {
        return;
    };
    write_header(sheet, last);

    for record in records {
        let block = block_for(record.date);
        sheet.set(date_header_cell(block), format_day(record.date));

        for (&item_id, &status) in &record.responses {
            let Some(cells) = status_cells(item_id, block) else {
                debug!(item_id, day = block.name(), "unmapped checklist item skipped");
                continue;
            };
            for cell in cells.all() {
                sheet.clear(cell);
            }
            sheet.set(cells.cell_for(status), MARK);
        }
    }
}

/// Header fields come from one record (the last of the set by date).
fn write_header(sheet: &mut Sheet, record: &InspectionRecord) {
    set_text(sheet, HeaderField::Plate, &record.vehicle_plate);
    set_text(sheet, HeaderField::Driver, &record.driver_name);
    set_text(sheet, HeaderField::City, &record.city);
    set_text(sheet, HeaderField::VehicleType, &record.vehicle_type);
    set_text(sheet, HeaderField::Brand, &record.brand);
    set_text(sheet, HeaderField::Model, &record.model);
    if let Some(odometer) = record.odometer_start {
        sheet.set(header_cell(HeaderField::Odometer), odometer.to_string());
    }
    sheet.set(header_cell(HeaderField::MonthYear), month_year_label(record.date));

    if let Some(selected) = record.fuel_type {
        for fuel in FuelType::ALL {
            sheet.clear(fuel_cell(fuel));
        }
        sheet.set(fuel_cell(selected), MARK);
    }
    if !record.license_categories.is_empty() {
        for category in LicenseCategory::ALL {
            sheet.clear(license_cell(category));
        }
        for &category in &record.license_categories {
            sheet.set(license_cell(category), MARK);
        }
    }

    for (field, expiry) in [
        (HeaderField::LicenseExpiry, record.license_expiry),
        (HeaderField::SotaExpiry, record.sota_expiry),
        (HeaderField::RtmExpiry, record.rtm_expiry),
        (HeaderField::PolicyExpiry, record.policy_expiry),
    ] {
        if let Some(date) = expiry {
            sheet.set(header_cell(field), format_day(date));
        }
    }

    if let Some(signature) = &record.signatures.driver {
        write_signature(sheet, SignatureSlot::Driver, signature);
    }
    if let Some(signature) = &record.signatures.safety_officer {
        write_signature(sheet, SignatureSlot::SafetyOfficer, signature);
    }
}

fn set_text(sheet: &mut Sheet, field: HeaderField, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    sheet.set(header_cell(field), value.to_uppercase());
}

fn write_signature(sheet: &mut Sheet, slot: SignatureSlot, signature: &SignatureBlock) {
    let cells = signature_cells(slot);
    sheet.set(cells.full_name, signature.full_name.to_uppercase());
    sheet.set(cells.id_number, signature.id_number.clone());
    sheet.set(cells.signed_at, signature.signed_at_display.clone());
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use preop_map::{
        CellRef, DayBlock, HeaderField, SignatureSlot, header_cell, license_cell, signature_cells,
        status_cells,
    };
    use preop_model::{
        FuelType, InspectionRecord, ItemStatus, LicenseCategory, SignatureBlock,
    };
    use preop_xlsx::Sheet;

    use super::project;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn record(plate: &str, d: NaiveDate) -> InspectionRecord {
        InspectionRecord::new(plate, d)
    }

    #[test]
    fn marks_land_in_the_day_block() {
        let mut sheet = Sheet::new("PREOP");
        let mut r = record("ABC123", date(2024, 3, 14)); // Thursday
        r.responses.insert(1, ItemStatus::Compliant);
        project(&mut sheet, &[r]);

        let cells = status_cells(1, DayBlock::Jueves).expect("mapped");
        assert_eq!(sheet.get(cells.compliant), Some("X"));
        assert_eq!(sheet.get(cells.non_compliant), None);
        assert_eq!(sheet.get(cells.not_applicable), None);
        // Date header for Thursday, no zero padding.
        assert_eq!(
            sheet.get(CellRef::parse("N11").expect("ref")),
            Some("14/3/2024")
        );
    }

    #[test]
    fn reprojection_is_idempotent() {
        let mut sheet = Sheet::new("PREOP");
        let mut r = record("ABC123", date(2024, 3, 14));
        r.responses.insert(6, ItemStatus::NotApplicable);
        project(&mut sheet, std::slice::from_ref(&r));
        project(&mut sheet, std::slice::from_ref(&r));

        let cells = status_cells(6, DayBlock::Jueves).expect("mapped");
        let marked: Vec<_> = cells.all().iter().filter_map(|&c| sheet.get(c)).collect();
        assert_eq!(marked, ["X"]);
        assert_eq!(sheet.get(cells.not_applicable), Some("X"));
    }

    #[test]
    fn changed_status_clears_the_stale_mark() {
        let mut sheet = Sheet::new("PREOP");
        let d = date(2024, 3, 14);
        let mut first = record("ABC123", d);
        first.responses.insert(1, ItemStatus::Compliant);
        project(&mut sheet, &[first]);

        let mut second = record("ABC123", d);
        second.responses.insert(1, ItemStatus::NonCompliant);
        project(&mut sheet, &[second]);

        let cells = status_cells(1, DayBlock::Jueves).expect("mapped");
        assert_eq!(sheet.get(cells.compliant), None);
        assert_eq!(sheet.get(cells.non_compliant), Some("X"));
    }

    #[test]
    fn header_consolidation_is_last_write_wins() {
        let mut sheet = Sheet::new("PREOP");
        let mut monday = record("ABC123", date(2024, 3, 11));
        monday.driver_name = "A".to_string();
        let mut wednesday = record("ABC123", date(2024, 3, 13));
        wednesday.driver_name = "B".to_string();
        project(&mut sheet, &[monday, wednesday]);

        assert_eq!(sheet.get(header_cell(HeaderField::Driver)), Some("B"));
        assert_eq!(sheet.get(header_cell(HeaderField::Plate)), Some("ABC123"));
        assert_eq!(
            sheet.get(header_cell(HeaderField::MonthYear)),
            Some("MARZO/2024")
        );
    }

    #[test]
    fn unmapped_item_changes_nothing() {
        let mut sheet = Sheet::new("PREOP");
        let mut r = record("ABC123", date(2024, 3, 14));
        r.responses.insert(9999, ItemStatus::Compliant);
        project(&mut sheet, &[r]);
        // Only the date header and month-year label were written.
        assert_eq!(sheet.cell_count(), 3);
        assert_eq!(sheet.get(header_cell(HeaderField::Plate)), Some("ABC123"));
    }

    #[test]
    fn fuel_selection_clears_siblings() {
        let mut sheet = Sheet::new("PREOP");
        let d = date(2024, 3, 14);
        let mut first = record("ABC123", d);
        first.fuel_type = Some(FuelType::Diesel);
        project(&mut sheet, &[first]);

        let mut second = record("ABC123", d);
        second.fuel_type = Some(FuelType::Gasolina);
        project(&mut sheet, &[second]);

        assert_eq!(sheet.get(preop_map::fuel_cell(FuelType::Gasolina)), Some("X"));
        assert_eq!(sheet.get(preop_map::fuel_cell(FuelType::Diesel)), None);
    }

    #[test]
    fn license_selection_marks_exactly_the_chosen_categories() {
        let mut sheet = Sheet::new("PREOP");
        let d = date(2024, 3, 14);
        let mut first = record("ABC123", d);
        first.license_categories.insert(LicenseCategory::A1);
        first.license_categories.insert(LicenseCategory::B1);
        project(&mut sheet, &[first]);

        let mut second = record("ABC123", d);
        second.license_categories.insert(LicenseCategory::C2);
        project(&mut sheet, &[second]);

        for category in LicenseCategory::ALL {
            let expected = (category == LicenseCategory::C2).then_some("X");
            assert_eq!(sheet.get(license_cell(category)), expected);
        }
    }

    #[test]
    fn signatures_land_in_their_slots() {
        let mut sheet = Sheet::new("PREOP");
        let mut monday = record("ABC123", date(2024, 3, 11));
        monday.signatures.driver = Some(SignatureBlock {
            full_name: "Pedro Perez".to_string(),
            id_number: "1020304050".to_string(),
            role: "CONDUCTOR".to_string(),
            signed_at_display: "11/3/2024 06:30".to_string(),
        });
        let mut wednesday = record("ABC123", date(2024, 3, 13));
        wednesday.signatures.driver = Some(SignatureBlock {
            full_name: "Maria Gomez".to_string(),
            id_number: "6070809010".to_string(),
            role: "CONDUCTOR".to_string(),
            signed_at_display: "13/3/2024 06:45".to_string(),
        });
        wednesday.signatures.safety_officer = Some(SignatureBlock {
            full_name: "Luis Rios".to_string(),
            id_number: "111222333".to_string(),
            role: "HSEQ".to_string(),
            signed_at_display: "13/3/2024 17:00".to_string(),
        });
        project(&mut sheet, &[monday, wednesday]);

        // Last record's signatures win, names uppercased, the rest verbatim.
        let driver = signature_cells(SignatureSlot::Driver);
        assert_eq!(sheet.get(driver.full_name), Some("MARIA GOMEZ"));
        assert_eq!(sheet.get(driver.id_number), Some("6070809010"));
        assert_eq!(sheet.get(driver.signed_at), Some("13/3/2024 06:45"));

        let officer = signature_cells(SignatureSlot::SafetyOfficer);
        assert_eq!(sheet.get(officer.full_name), Some("LUIS RIOS"));
        assert_eq!(sheet.get(officer.id_number), Some("111222333"));
        assert_eq!(sheet.get(officer.signed_at), Some("13/3/2024 17:00"));
    }

    #[test]
    fn empty_record_set_writes_nothing() {
        let mut sheet = Sheet::new("PREOP");
        project(&mut sheet, &[]);
        assert_eq!(sheet.cell_count(), 0);
    }
}
