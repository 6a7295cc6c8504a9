//! Core data models for Wealth Architect
//!
//! Everything here is transient: created per submission and dropped after
//! rendering.

pub mod affirmation;
pub mod money;
pub mod projection;

pub use affirmation::{Affirmation, AffirmationSet};
pub use money::{format_short, sanitize_amount_input, MoneyParseError, Vnd};
pub use projection::{
    Projection, ProjectionPoint, ProjectionRequest, ProjectionValidationError, MAX_YEARS,
    MIN_YEARS,
};
