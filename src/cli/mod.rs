//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod affirm;
pub mod project;

pub use affirm::{handle_affirm_command, handle_plan_command, AffirmArgs, PlanArgs};
pub use project::{handle_project_command, ProjectArgs};
