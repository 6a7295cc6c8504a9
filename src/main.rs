use anyhow::Result;
use clap::{Parser, Subcommand};

use wealth_architect::cli::{
    handle_affirm_command, handle_plan_command, handle_project_command, AffirmArgs, PlanArgs,
    ProjectArgs,
};
use wealth_architect::config::{paths::WealthPaths, settings::Settings};
use wealth_architect::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "wealth",
    version,
    about = "Compound-growth projector and affirmation generator",
    long_about = "Wealth Architect projects how a target amount grows under yearly \
                  compounding and asks Gemini for one hundred Vietnamese affirmations \
                  about owning that amount."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Project compound growth for a target amount
    Project(ProjectArgs),

    /// Generate 100 affirmations for a target amount
    Affirm(AffirmArgs),

    /// Projection followed by affirmations, like the TUI trigger
    Plan(PlanArgs),

    /// Initialize the data directory and write default settings
    Init,

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WealthPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Logging goes to a file so the TUI screen stays clean
    let _logger = init_logging(&paths, &settings.log_level)?;

    match cli.command {
        Some(Commands::Tui) => {
            let runtime = build_runtime()?;
            wealth_architect::tui::run_tui(&settings, runtime.handle().clone())?;
        }
        Some(Commands::Project(args)) => {
            handle_project_command(&paths, &settings, args)?;
        }
        Some(Commands::Affirm(args)) => {
            let runtime = build_runtime()?;
            runtime.block_on(handle_affirm_command(&settings, args))?;
        }
        Some(Commands::Plan(args)) => {
            let runtime = build_runtime()?;
            runtime.block_on(handle_plan_command(&settings, args))?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Already initialized; keeping existing settings at {}",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            println!("Initializing Wealth Architect at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            if !settings.has_api_key() {
                println!(
                    "Set {} to your Gemini API key to enable affirmations.",
                    settings.api_key_env
                );
            }
        }
        Some(Commands::Config) => {
            println!("Wealth Architect Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log directory:    {}", paths.log_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Model:           {}", settings.model);
            println!("  API base URL:    {}", settings.api_base_url);
            println!(
                "  API key env:     {} ({})",
                settings.api_key_env,
                if settings.has_api_key() { "set" } else { "not set" }
            );
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Default years:   {}", settings.default_years);
            println!("  Default rate:    {}%", settings.default_rate_percent);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Wealth Architect - Cái gì mà tôi không làm bù được chính là tài sản của tôi");
            println!();
            println!("Run 'wealth --help' for usage information.");
            println!("Run 'wealth tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
