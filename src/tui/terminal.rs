//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.
//! It also runs the effects queued by the app on the tokio runtime.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::settings::Settings;
use crate::services::affirmation::AffirmationService;
use crate::state::Effect;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Affirmation requests run on `runtime`; their results come back through
/// the event channel. Requests still in flight when the user quits are
/// aborted.
pub fn run_tui(settings: &Settings, runtime: Handle) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    let events = EventHandler::default();
    let mut tasks: Vec<JoinHandle<()>> = Vec::new();

    info!("event=tui_start model={}", settings.model);

    let outcome = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| {
                super::views::render(frame, &mut app);
            })?;

            let event = events.next()?;
            handle_event(&mut app, event)?;

            for effect in app.take_effects() {
                tasks.push(spawn_effect(&runtime, settings, effect, events.sender()));
            }
            tasks.retain(|task| !task.is_finished());

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    for task in &tasks {
        task.abort();
    }
    if !tasks.is_empty() {
        debug!("event=tui_quit aborted_requests={}", tasks.len());
    }

    restore_terminal()?;
    outcome
}

/// Start the work an effect asks for
fn spawn_effect(
    runtime: &Handle,
    settings: &Settings,
    effect: Effect,
    sender: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    match effect {
        Effect::RequestAffirmations { seq, amount } => {
            let service = AffirmationService::from_settings(settings);
            runtime.spawn(async move {
                let outcome = match service {
                    Ok(service) => service.generate(&amount).await,
                    Err(e) => Err(e),
                };
                let outcome = outcome.map_err(|e| e.to_string());
                // The receiver is gone once the UI has quit
                let _ = sender.send(Event::AffirmationsReady { seq, outcome });
            })
        }
    }
}
