//! Export orchestration: record selection, projection, serialization.
//!
//! The orchestrator reads but never mutates the saved records; only the
//! in-memory copy of the template changes. Every failure is terminal for
//! the triggering action, nothing retries.

use chrono::NaiveDate;
use preop_model::{InspectionRecord, normalize_plate};
use tracing::{info, info_span};

use crate::dates::week_id;
use crate::error::{ExportError, Result};
use crate::project::project;

/// Which record set an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// The one record for `(plate, date)`, else the caller's draft.
    SingleDay,
    /// All records for the plate in `date`'s week, date-ascending.
    WeekConsolidated,
}

/// A finished export: the bytes and the exact name to save them under.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The remote spreadsheet-to-document conversion collaborator.
///
/// Synchronous request/response; implementations return the rendered
/// document bytes or a message describing the failure.
pub trait Renderer {
    fn convert(&self, xlsx: &[u8]) -> std::result::Result<Vec<u8>, String>;
}

/// Select the record set for an export.
///
/// `saved` may hold any of the plate's records; filtering and ordering
/// happen here. The draft stands in for an unsaved day when no record
/// exists for `(plate, date)`.
pub fn select_records(
    mode: ExportMode,
    plate: &str,
    date: NaiveDate,
    saved: &[InspectionRecord],
    draft: Option<&InspectionRecord>,
) -> Vec<InspectionRecord> {
    let plate = normalize_plate(plate);
    match mode {
        ExportMode::SingleDay => saved
            .iter()
            .find(|r| normalize_plate(&r.vehicle_plate) == plate && r.date == date)
            .or(draft)
            .cloned()
            .into_iter()
            .collect(),
        ExportMode::WeekConsolidated => {
            let week = week_id(date);
            let mut records: Vec<InspectionRecord> = saved
                .iter()
                .filter(|r| normalize_plate(&r.vehicle_plate) == plate && week_id(r.date) == week)
                .cloned()
                .collect();
            records.sort_by_key(|r| r.date);
            records
        }
    }
}

/// Produce the populated spreadsheet for direct download.
///
/// File name: `Preoperacional_{plate}_{date}.xlsx` for a single day,
/// `Preoperacional_{plate}_{weekId}_CONSOLIDADO.xlsx` for a week.
pub fn export_xlsx(
    template: Option<&[u8]>,
    plate: &str,
    date: NaiveDate,
    mode: ExportMode,
    saved: &[InspectionRecord],
    draft: Option<&InspectionRecord>,
) -> Result<ExportArtifact> {
    let span = info_span!("export_xlsx", plate, date = %date);
    let _guard = span.enter();

    let plate = require_plate(plate)?;
    let template = template.ok_or(ExportError::MissingTemplate)?;
    let records = select_records(mode, &plate, date, saved, draft);
    if records.is_empty() {
        return Err(nothing_to_export(&plate, date, mode));
    }

    let mut sheet = preop_xlsx::load_template(template)?;
    project(&mut sheet, &records);
    let bytes = preop_xlsx::sheet_to_bytes(&sheet)?;

    let file_name = match mode {
        ExportMode::SingleDay => {
            format!("Preoperacional_{plate}_{}.xlsx", date.format("%Y-%m-%d"))
        }
        ExportMode::WeekConsolidated => {
            format!("Preoperacional_{plate}_{}_CONSOLIDADO.xlsx", week_id(date))
        }
    };
    info!(file = %file_name, days = records.len(), "spreadsheet export ready");
    Ok(ExportArtifact { file_name, bytes })
}

/// Produce the rendered weekly document via the conversion collaborator.
///
/// The record set is always the week group; on collaborator failure the
/// message is surfaced verbatim and no artifact is produced.
pub fn export_pdf(
    template: Option<&[u8]>,
    plate: &str,
    date: NaiveDate,
    saved: &[InspectionRecord],
    renderer: &dyn Renderer,
) -> Result<ExportArtifact> {
    let span = info_span!("export_pdf", plate, date = %date);
    let _guard = span.enter();

    let plate = require_plate(plate)?;
    let template = template.ok_or(ExportError::MissingTemplate)?;
    let records = select_records(ExportMode::WeekConsolidated, &plate, date, saved, None);
    if records.is_empty() {
        return Err(nothing_to_export(&plate, date, ExportMode::WeekConsolidated));
    }

    let mut sheet = preop_xlsx::load_template(template)?;
    project(&mut sheet, &records);
    let xlsx = preop_xlsx::sheet_to_bytes(&sheet)?;
    let bytes = renderer.convert(&xlsx).map_err(ExportError::Render)?;

    let file_name = format!("Preoperacional_{plate}_{}.pdf", week_id(date));
    info!(file = %file_name, days = records.len(), "rendered document ready");
    Ok(ExportArtifact { file_name, bytes })
}

fn require_plate(plate: &str) -> Result<String> {
    let plate = normalize_plate(plate);
    if plate.is_empty() {
        return Err(ExportError::MissingPlate);
    }
    Ok(plate)
}

fn nothing_to_export(plate: &str, date: NaiveDate, mode: ExportMode) -> ExportError {
    let scope = match mode {
        ExportMode::SingleDay => date.format("%Y-%m-%d").to_string(),
        ExportMode::WeekConsolidated => format!("week of {}", week_id(date)),
    };
    ExportError::NothingToExport {
        plate: plate.to_string(),
        scope,
    }
}
