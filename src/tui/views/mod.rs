//! TUI Views module
//!
//! One render function per panel, plus the dispatcher that lays them out.

pub mod affirmations;
pub mod chart;
pub mod form;
pub mod header;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, layout.header);
    form::render(frame, app, layout.form);
    summary::render(frame, app, layout.summary);
    chart::render(frame, app, layout.chart);
    affirmations::render(frame, app, layout.affirmations);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
