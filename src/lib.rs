//! Wealth Architect - compound-growth projector with generated affirmations
//!
//! This library provides the core functionality for the Wealth Architect
//! application: a yearly compound-growth projection for a target amount and
//! a request to Gemini for one hundred Vietnamese affirmations about it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File logging setup
//! - `models`: Core data models (money, projections, affirmations)
//! - `services`: Projection math and the affirmation requester
//! - `state`: Form state container driven by actions
//! - `display`: Text rendering for CLI output
//! - `export`: CSV and JSON writers
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use wealth_architect::services::projection::project;
//!
//! let points = project(16_800_000_000.0, 10.0, 10);
//! assert_eq!(points.len(), 11);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod tui;

pub use error::WealthError;
