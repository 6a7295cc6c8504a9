//! Application state container
//!
//! All mutable front-end state (form inputs, loading flag, results) lives in
//! [`AppState`] and only changes through [`AppState::apply`]. The projector
//! runs inside `apply`; the affirmation request is handed back to the caller
//! as an [`Effect`] so the state itself never touches the network.

pub mod action;

pub use action::{Action, Effect};

use log::warn;

use crate::config::settings::Settings;
use crate::models::{
    sanitize_amount_input, Affirmation, Projection, ProjectionRequest, Vnd, MAX_YEARS, MIN_YEARS,
};
use crate::services::projection::build_projection;

/// Lifecycle of the affirmation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Explicit state for one interactive session
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Amount as displayed, comma-grouped
    pub amount: String,
    pub years: u32,
    pub rate_percent: f64,
    pub loading: LoadingState,
    pub projection: Option<Projection>,
    pub affirmations: Vec<Affirmation>,
    /// Sequence number of the most recently issued request
    pub request_seq: u64,
    /// Cause of the last failure, for the status line
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(10, 10.0)
    }
}

impl AppState {
    /// Create state with the given form defaults
    pub fn new(years: u32, rate_percent: f64) -> Self {
        Self {
            amount: String::new(),
            years: years.clamp(MIN_YEARS, MAX_YEARS),
            rate_percent: clamp_rate(rate_percent).unwrap_or(0.0),
            loading: LoadingState::Idle,
            projection: None,
            affirmations: Vec::new(),
            request_seq: 0,
            last_error: None,
        }
    }

    /// Create state pre-filled from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.default_years, settings.default_rate_percent)
    }

    /// Principal parsed from the amount field, zero when empty
    pub fn principal(&self) -> u64 {
        Vnd::parse(&self.amount)
            .map(|v| v.dong().max(0) as u64)
            .unwrap_or(0)
    }

    /// Whether an affirmation request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading == LoadingState::Pending
    }

    /// Whether the trigger should be enabled
    pub fn can_submit(&self) -> bool {
        self.principal() > 0 && !self.is_loading()
    }

    /// Apply an action, returning any effect the caller must run
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SetAmount(raw) => {
                self.amount = sanitize_amount_input(&raw);
                None
            }
            Action::SetYears(years) => {
                self.years = years.clamp(MIN_YEARS, MAX_YEARS);
                None
            }
            Action::SetRate(rate) => {
                if let Some(rate) = clamp_rate(rate) {
                    self.rate_percent = rate;
                }
                None
            }
            Action::Submit => self.submit(),
            Action::AffirmationsResolved { seq, items } => {
                if seq == self.request_seq && self.is_loading() {
                    self.affirmations = items;
                    self.loading = LoadingState::Succeeded;
                    self.last_error = None;
                }
                None
            }
            Action::AffirmationsFailed { seq, message } => {
                if seq == self.request_seq && self.is_loading() {
                    self.affirmations.clear();
                    self.loading = LoadingState::Failed;
                    self.last_error = Some(message);
                }
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }

        let request = ProjectionRequest::new(self.principal(), self.rate_percent, self.years);
        match build_projection(request) {
            Ok(projection) => self.projection = Some(projection),
            Err(e) => {
                warn!("event=submit status=rejected cause={}", e);
                self.last_error = Some(e.to_string());
                return None;
            }
        }

        self.loading = LoadingState::Pending;
        self.affirmations.clear();
        self.last_error = None;
        self.request_seq += 1;

        Some(Effect::RequestAffirmations {
            seq: self.request_seq,
            amount: self.amount.clone(),
        })
    }
}

fn clamp_rate(rate: f64) -> Option<f64> {
    rate.is_finite().then(|| rate.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affirmation(id: i64) -> Affirmation {
        Affirmation {
            id,
            category: "Sự chắc chắn - Hiện tại đơn".into(),
            content: "Tôi sở hữu số tiền này.".into(),
        }
    }

    fn ready_state() -> AppState {
        let mut state = AppState::default();
        state.apply(Action::SetAmount("16800000000".into()));
        state
    }

    #[test]
    fn test_amount_is_sanitized() {
        let mut state = AppState::default();
        state.apply(Action::SetAmount("16.800.000.000 VND".into()));
        assert_eq!(state.amount, "16,800,000,000");
        assert_eq!(state.principal(), 16_800_000_000);
    }

    #[test]
    fn test_years_and_rate_are_clamped() {
        let mut state = AppState::default();
        state.apply(Action::SetYears(0));
        assert_eq!(state.years, 1);
        state.apply(Action::SetYears(250));
        assert_eq!(state.years, 100);
        state.apply(Action::SetRate(-3.0));
        assert_eq!(state.rate_percent, 0.0);
        state.apply(Action::SetRate(f64::NAN));
        assert_eq!(state.rate_percent, 0.0);
    }

    #[test]
    fn test_submit_without_amount_does_nothing() {
        let mut state = AppState::default();
        assert_eq!(state.apply(Action::Submit), None);
        assert_eq!(state.loading, LoadingState::Idle);
        assert!(state.projection.is_none());
    }

    #[test]
    fn test_submit_projects_and_requests() {
        let mut state = ready_state();
        let effect = state.apply(Action::Submit);

        assert_eq!(
            effect,
            Some(Effect::RequestAffirmations {
                seq: 1,
                amount: "16,800,000,000".into()
            })
        );
        assert_eq!(state.loading, LoadingState::Pending);
        let projection = state.projection.as_ref().unwrap();
        assert_eq!(projection.points.len(), 11);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_resubmission_blocked_while_pending() {
        let mut state = ready_state();
        state.apply(Action::Submit);
        assert_eq!(state.apply(Action::Submit), None);
        assert_eq!(state.request_seq, 1);
    }

    #[test]
    fn test_pending_to_succeeded() {
        let mut state = ready_state();
        state.apply(Action::Submit);
        state.apply(Action::AffirmationsResolved {
            seq: 1,
            items: vec![affirmation(1), affirmation(2)],
        });
        assert_eq!(state.loading, LoadingState::Succeeded);
        assert_eq!(state.affirmations.len(), 2);
        assert!(state.can_submit());
    }

    #[test]
    fn test_pending_to_failed() {
        let mut state = ready_state();
        state.apply(Action::Submit);
        state.apply(Action::AffirmationsFailed {
            seq: 1,
            message: "timeout".into(),
        });
        assert_eq!(state.loading, LoadingState::Failed);
        assert!(state.affirmations.is_empty());
        assert_eq!(state.last_error.as_deref(), Some("timeout"));
        // the projection is independent of the affirmation outcome
        assert!(state.projection.is_some());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = ready_state();
        state.apply(Action::Submit);
        state.apply(Action::AffirmationsFailed {
            seq: 1,
            message: "boom".into(),
        });
        state.apply(Action::Submit);
        assert_eq!(state.request_seq, 2);

        state.apply(Action::AffirmationsResolved {
            seq: 1,
            items: vec![affirmation(1)],
        });
        assert_eq!(state.loading, LoadingState::Pending);
        assert!(state.affirmations.is_empty());
    }

    #[test]
    fn test_new_submit_clears_previous_affirmations() {
        let mut state = ready_state();
        state.apply(Action::Submit);
        state.apply(Action::AffirmationsResolved {
            seq: 1,
            items: vec![affirmation(1)],
        });
        state.apply(Action::SetYears(20));
        state.apply(Action::Submit);

        assert!(state.affirmations.is_empty());
        assert_eq!(state.projection.as_ref().unwrap().points.len(), 21);
    }
}
