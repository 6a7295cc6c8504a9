//! Configuration module for Wealth Architect
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WealthPaths;
pub use settings::Settings;
