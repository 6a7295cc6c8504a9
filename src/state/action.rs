//! Actions accepted by the application state, and effects it asks for

use crate::models::Affirmation;

/// Everything that can change [`super::AppState`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raw text typed into the amount field
    SetAmount(String),
    /// New horizon; clamped into the supported range
    SetYears(u32),
    /// New annual rate in percent; negative values clamp to zero
    SetRate(f64),
    /// The trigger: project now, then request affirmations
    Submit,
    /// The affirmation request numbered `seq` succeeded
    AffirmationsResolved { seq: u64, items: Vec<Affirmation> },
    /// The affirmation request numbered `seq` failed
    AffirmationsFailed { seq: u64, message: String },
}

/// Side effects the shell must perform after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an affirmation request for `amount` and report back with `seq`
    RequestAffirmations { seq: u64, amount: String },
}
