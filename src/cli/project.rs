//! Projection CLI command
//!
//! Runs the growth projector once and prints or exports the result.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::paths::WealthPaths;
use crate::config::settings::Settings;
use crate::display::{format_growth_chart, format_projection_summary, format_projection_table};
use crate::error::{WealthError, WealthResult};
use crate::export::{write_json, write_projection_csv, ProjectionExport};
use crate::models::{Projection, ProjectionRequest, Vnd, MAX_YEARS, MIN_YEARS};
use crate::services::projection::build_projection;

/// Width of the text bar chart
const CHART_WIDTH: usize = 40;

/// Output format for `project`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectFormat {
    /// Summary, year table and bar chart
    Table,
    /// Versioned JSON envelope
    Json,
    /// One CSV row per year
    Csv,
}

/// Arguments shared by commands that take a projection target
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target amount in VND (separators are ignored, e.g. 16,800,000,000)
    pub amount: String,

    /// Horizon in years (1-100); defaults to the configured value
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(MIN_YEARS as i64..=MAX_YEARS as i64))]
    pub years: Option<u32>,

    /// Annual compound rate in percent, e.g. 10 or 7.5; defaults to the configured value
    #[arg(short, long)]
    pub rate: Option<f64>,
}

impl TargetArgs {
    /// Turn the arguments into a projection request, filling gaps from settings
    pub fn to_request(&self, settings: &Settings) -> WealthResult<ProjectionRequest> {
        let principal = Vnd::parse(&self.amount)
            .map_err(|e| WealthError::Validation(format!("Invalid amount: {}", e)))?;

        Ok(ProjectionRequest::new(
            principal.dong().max(0) as u64,
            self.rate.unwrap_or(settings.default_rate_percent),
            self.years.unwrap_or(settings.default_years),
        ))
    }
}

/// Arguments for `project`
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ProjectFormat::Table)]
    pub format: ProjectFormat,

    /// Write to a file (or into a directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save into the exports directory with a timestamped name
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

/// Handle the project command
pub fn handle_project_command(
    paths: &WealthPaths,
    settings: &Settings,
    args: ProjectArgs,
) -> WealthResult<()> {
    let request = args.target.to_request(settings)?;
    let projection = build_projection(request)?;

    let destination = if args.save {
        let dir = paths.export_dir();
        std::fs::create_dir_all(&dir).map_err(|e| {
            WealthError::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Some(default_export_path(&dir, args.format))
    } else {
        args.output.as_ref().map(|path| {
            if path.is_dir() {
                default_export_path(path, args.format)
            } else {
                path.clone()
            }
        })
    };

    match destination {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                WealthError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_projection(&projection, args.format, BufWriter::new(file))?;
            println!("Wrote projection to {}", path.display());
        }
        None => write_projection(&projection, args.format, io::stdout().lock())?,
    }

    Ok(())
}

/// Render a projection in the requested format
pub fn write_projection<W: Write>(
    projection: &Projection,
    format: ProjectFormat,
    mut writer: W,
) -> WealthResult<()> {
    match format {
        ProjectFormat::Table => {
            write!(writer, "{}", render_projection_text(projection))?;
            writer.flush()?;
        }
        ProjectFormat::Json => write_json(&ProjectionExport::new(projection), writer)?,
        ProjectFormat::Csv => write_projection_csv(projection, writer)?,
    }
    Ok(())
}

/// Summary, table and chart as one block of text
pub fn render_projection_text(projection: &Projection) -> String {
    let mut output = String::new();
    output.push_str(&format_projection_summary(projection));
    output.push('\n');
    output.push_str(&format_projection_table(projection));
    output.push_str("\n\nSức Mạnh Lãi Kép (A = P(1 + r/n)^nt, n = 1)\n");
    output.push_str(&format_growth_chart(projection, CHART_WIDTH));
    output
}

/// Default export file name for a format, inside `dir`
pub fn default_export_path(dir: &Path, format: ProjectFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let extension = match format {
        ProjectFormat::Table => "txt",
        ProjectFormat::Json => "json",
        ProjectFormat::Csv => "csv",
    };
    dir.join(format!("projection-{}.{}", stamp, extension))
}
