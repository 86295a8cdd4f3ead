//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use comfy_table::Table;
use tracing::info;

use preop_core::{ExportArtifact, ExportMode, export_pdf, export_xlsx};
use preop_model::InspectionRecord;
use preop_render::HttpRenderer;
use preop_store::{Store, find_vehicle, suggest_vehicles};

use crate::cli::{ExportArgs, SaveArgs, TemplateCommand, VehiclesArgs};

pub fn run_save(state: &Path, args: &SaveArgs) -> Result<()> {
    let mut record = read_form(&args.form)?;
    autofill_vehicle(&mut record);

    let mut store = Store::open(state);
    let responses = record.responses.len();
    let key = store.upsert_record(record);
    store.save().context("persist state")?;
    info!(key, responses, "record saved");
    println!("saved {key} ({responses} responses)");
    Ok(())
}

pub fn run_export(state: &Path, args: &ExportArgs) -> Result<()> {
    let store = Store::open(state);
    let date = args.date.unwrap_or_else(today);
    let saved = store.records_for_plate(&args.plate);
    let draft = args
        .draft
        .as_deref()
        .map(read_form)
        .transpose()?
        .map(|mut record| {
            autofill_vehicle(&mut record);
            record
        });

    let artifact = if args.pdf {
        let renderer = HttpRenderer::new(&args.render_url);
        export_pdf(store.template(), &args.plate, date, &saved, &renderer)?
    } else {
        let mode = if args.week {
            ExportMode::WeekConsolidated
        } else {
            ExportMode::SingleDay
        };
        export_xlsx(
            store.template(),
            &args.plate,
            date,
            mode,
            &saved,
            draft.as_ref(),
        )?
    };
    write_artifact(args.output_dir.as_deref(), &artifact)
}

pub fn run_vehicles(args: &VehiclesArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Plate", "Brand", "Family", "Description"]);
    apply_table_style(&mut table);

    if let Some(vehicle) = find_vehicle(&args.query) {
        table.add_row(vec![
            &vehicle.plate,
            &vehicle.brand,
            &vehicle.family,
            &vehicle.description,
        ]);
        println!("{table}");
        return Ok(());
    }
    let suggestions = suggest_vehicles(&args.query);
    if suggestions.is_empty() {
        println!("no vehicles match '{}'", args.query);
        return Ok(());
    }
    for vehicle in suggestions {
        table.add_row(vec![
            &vehicle.plate,
            &vehicle.brand,
            &vehicle.family,
            &vehicle.description,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_template(state: &Path, command: &TemplateCommand) -> Result<()> {
    let mut store = Store::open(state);
    match command {
        TemplateCommand::Set { path } => {
            let bytes = fs::read(path)
                .with_context(|| format!("read template {}", path.display()))?;
            // Reject bytes the exporter could not open later.
            preop_xlsx::load_template(&bytes).context("open template workbook")?;
            store.set_template(bytes);
            store.save().context("persist state")?;
            println!("template stored from {}", path.display());
        }
        TemplateCommand::Clear => {
            store.clear_template();
            store.save().context("persist state")?;
            println!("template cleared");
        }
        TemplateCommand::Status => match store.template() {
            Some(bytes) => println!(
                "template loaded ({} bytes), {} saved records",
                bytes.len(),
                store.record_count()
            ),
            None => println!("no template loaded, {} saved records", store.record_count()),
        },
    }
    Ok(())
}

pub fn run_checklist() -> Result<()> {
    for section in preop_model::catalog() {
        println!("{}", section.title);
        let mut table = Table::new();
        table.set_header(vec!["Item", "Description"]);
        apply_table_style(&mut table);
        for item in &section.items {
            table.add_row(vec![item.id.to_string(), item.label.clone()]);
        }
        println!("{table}");
    }
    Ok(())
}

fn read_form(path: &Path) -> Result<InspectionRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read form {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse form {}", path.display()))
}

/// Fill vehicle type, brand, and model from the fleet catalog when the form
/// left them empty and the plate is known.
fn autofill_vehicle(record: &mut InspectionRecord) {
    if !record.brand.is_empty() {
        return;
    }
    if let Some(vehicle) = find_vehicle(&record.vehicle_plate) {
        record.vehicle_type = vehicle.family.clone();
        record.brand = vehicle.brand.clone();
        record.model = vehicle.description.clone();
    }
}

fn write_artifact(output_dir: Option<&Path>, artifact: &ExportArtifact) -> Result<()> {
    let path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
            dir.join(&artifact.file_name)
        }
        None => Path::new(&artifact.file_name).to_path_buf(),
    };
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn apply_table_style(table: &mut Table) {
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
}
