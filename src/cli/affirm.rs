//! Affirmation CLI commands
//!
//! `affirm` runs the affirmation requester once; `plan` replays the whole
//! trigger flow non-interactively: projection first, then affirmations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::project::{render_projection_text, TargetArgs};
use crate::config::settings::Settings;
use crate::display::{format_affirmation_cards, GENERATION_ERROR_MESSAGE};
use crate::error::{WealthError, WealthResult};
use crate::export::{write_json, AffirmationExport};
use crate::models::{sanitize_amount_input, Affirmation, Vnd};
use crate::services::affirmation::AffirmationService;
use crate::services::projection::build_projection;

/// Width used when wrapping cards
const CARD_WIDTH: usize = 76;

/// Output format for `affirm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AffirmFormat {
    /// Numbered cards
    Text,
    /// `{ "affirmations": [...] }` envelope
    Json,
}

/// Arguments for `affirm`
#[derive(Args, Debug)]
pub struct AffirmArgs {
    /// Target amount in VND (separators are ignored)
    pub amount: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = AffirmFormat::Text)]
    pub format: AffirmFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Normalize the amount the way the form does and reject zero
fn display_amount(raw: &str) -> WealthResult<String> {
    let amount = sanitize_amount_input(raw);
    let principal = Vnd::parse(&amount)
        .map_err(|e| WealthError::Validation(format!("Invalid amount: {}", e)))?;
    if principal.is_zero() {
        return Err(WealthError::Validation(
            "Target amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Run one request, printing the static failure message on error
async fn request_affirmations(
    settings: &Settings,
    amount: &str,
) -> WealthResult<Vec<Affirmation>> {
    let outcome = match AffirmationService::from_settings(settings) {
        Ok(service) => service.generate(amount).await,
        Err(e) => Err(e),
    };

    if outcome.is_err() {
        eprintln!("{}", GENERATION_ERROR_MESSAGE);
    }
    outcome
}

/// Handle the affirm command
pub async fn handle_affirm_command(settings: &Settings, args: AffirmArgs) -> WealthResult<()> {
    let amount = display_amount(&args.amount)?;
    let affirmations = request_affirmations(settings, &amount).await?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                WealthError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_affirmations(&amount, affirmations, args.format, BufWriter::new(file))?;
            println!("Wrote affirmations to {}", path.display());
        }
        None => write_affirmations(&amount, affirmations, args.format, io::stdout().lock())?,
    }

    Ok(())
}

/// Render affirmations in the requested format
pub fn write_affirmations<W: Write>(
    amount: &str,
    affirmations: Vec<Affirmation>,
    format: AffirmFormat,
    mut writer: W,
) -> WealthResult<()> {
    match format {
        AffirmFormat::Text => {
            write!(
                writer,
                "{}",
                format_affirmation_cards(&affirmations, CARD_WIDTH)
            )?;
            writer.flush()?;
        }
        AffirmFormat::Json => write_json(&AffirmationExport::new(amount, affirmations), writer)?,
    }
    Ok(())
}

/// Handle the plan command
///
/// The projection is printed before the request starts and stays valid
/// whatever happens to the affirmation call.
pub async fn handle_plan_command(settings: &Settings, args: PlanArgs) -> WealthResult<()> {
    let request = args.target.to_request(settings)?;
    let projection = build_projection(request)?;
    let amount = display_amount(&args.target.amount)?;

    println!("{}", render_projection_text(&projection));
    println!("Đang Kiến Tạo...");

    let affirmations = request_affirmations(settings, &amount).await?;
    println!();
    print!("{}", format_affirmation_cards(&affirmations, CARD_WIDTH));
    Ok(())
}
