//! Display formatting for terminal output
//!
//! Provides utilities for formatting projections and affirmations for the
//! non-interactive CLI commands.

pub mod affirmation;
pub mod projection;
pub mod report;

pub use affirmation::{format_affirmation_cards, GENERATION_ERROR_MESSAGE};
pub use projection::{format_growth_chart, format_projection_summary, format_projection_table};
