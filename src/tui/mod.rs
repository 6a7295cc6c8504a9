//! Terminal User Interface module
//!
//! Interactive front end built with ratatui: a target form, a summary card,
//! a growth chart and the affirmation list.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
