//! CLI argument definitions for the inspection toolkit.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "preop",
    version,
    about = "Weekly vehicle pre-operational inspection toolkit",
    long_about = "Digitizes the weekly pre-operational inspection checklist.\n\n\
                  Saves one record per vehicle and day, consolidates a week of\n\
                  records onto the corporate xlsx form, and optionally renders\n\
                  the result to PDF through the conversion service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// State file holding the template blob and saved records.
    #[arg(
        long = "state",
        value_name = "PATH",
        env = "PREOP_STATE",
        default_value = "preop-state.json",
        global = true
    )]
    pub state: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Save a day's inspection record from a JSON form file.
    Save(SaveArgs),

    /// Export the populated form for a vehicle (xlsx, or pdf via the renderer).
    Export(ExportArgs),

    /// Look up fleet vehicles by plate (exact or substring).
    Vehicles(VehiclesArgs),

    /// Manage the stored xlsx template.
    #[command(subcommand)]
    Template(TemplateCommand),

    /// Print the checklist catalog.
    Checklist,
}

#[derive(Parser)]
pub struct SaveArgs {
    /// Path to the day's form as JSON (one inspection record).
    #[arg(value_name = "FORM_JSON")]
    pub form: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Vehicle plate.
    #[arg(value_name = "PLATE")]
    pub plate: String,

    /// Reference date, `YYYY-MM-DD` (default: today).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Consolidate the whole Monday-to-Sunday week instead of one day.
    #[arg(long = "week")]
    pub week: bool,

    /// Render the weekly form to PDF through the conversion service.
    #[arg(long = "pdf", conflicts_with = "week")]
    pub pdf: bool,

    /// Unsaved form JSON to export when no record exists for the date.
    #[arg(long = "draft", value_name = "FORM_JSON")]
    pub draft: Option<PathBuf>,

    /// Directory to write the artifact into (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base URL of the rendering service.
    #[arg(
        long = "render-url",
        value_name = "URL",
        env = "PREOP_RENDER_URL",
        default_value = "http://localhost:3001"
    )]
    pub render_url: String,
}

#[derive(Parser)]
pub struct VehiclesArgs {
    /// Plate or plate fragment to search for.
    #[arg(value_name = "QUERY")]
    pub query: String,
}

#[derive(Subcommand)]
pub enum TemplateCommand {
    /// Store an xlsx template file.
    Set {
        /// Path to the template workbook.
        #[arg(value_name = "XLSX")]
        path: PathBuf,
    },
    /// Remove the stored template.
    Clear,
    /// Show whether a template is stored.
    Status,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
