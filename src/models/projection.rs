//! Compound-growth projection models
//!
//! A [`ProjectionRequest`] is what the user asked for; a [`Projection`] is the
//! request together with its year-by-year [`ProjectionPoint`] series.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Vnd;

/// Shortest supported horizon, in years
pub const MIN_YEARS: u32 = 1;

/// Longest supported horizon, in years
pub const MAX_YEARS: u32 = 100;

/// One year of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years elapsed since the start (0 = today)
    pub year: u32,
    /// Initial capital, constant across the series
    pub principal: f64,
    /// Accumulated interest up to this year
    pub interest: f64,
    /// Principal plus interest
    pub total: f64,
}

/// A validated-on-demand projection input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Target amount in đồng
    pub principal: u64,
    /// Annual rate as a percentage (10.0 means 10%)
    pub annual_rate_percent: f64,
    /// Horizon in years
    pub years: u32,
}

impl ProjectionRequest {
    /// Create a new request
    pub fn new(principal: u64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }

    /// Validate the request against the projector's input domain
    pub fn validate(&self) -> Result<(), ProjectionValidationError> {
        if self.principal == 0 {
            return Err(ProjectionValidationError::ZeroPrincipal);
        }

        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(ProjectionValidationError::InvalidRate(
                self.annual_rate_percent,
            ));
        }

        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(ProjectionValidationError::YearsOutOfRange(self.years));
        }

        Ok(())
    }
}

/// A computed projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub request: ProjectionRequest,
    pub points: Vec<ProjectionPoint>,
}

impl Projection {
    /// Total at the end of the horizon
    pub fn final_total(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.total)
            .unwrap_or(self.request.principal as f64)
    }

    /// Final total rounded to đồng
    pub fn final_amount(&self) -> Vnd {
        Vnd::from_f64(self.final_total())
    }

    /// How many times the principal the final total is
    pub fn multiplier(&self) -> f64 {
        if self.request.principal == 0 {
            return 0.0;
        }
        self.final_total() / self.request.principal as f64
    }

    /// Largest total in the series, used to scale charts
    pub fn max_total(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.total)
            .fold(0.0_f64, f64::max)
    }
}

/// Validation errors for projection requests
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionValidationError {
    ZeroPrincipal,
    InvalidRate(f64),
    YearsOutOfRange(u32),
}

impl fmt::Display for ProjectionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPrincipal => write!(f, "Target amount must be greater than zero"),
            Self::InvalidRate(rate) => {
                write!(f, "Annual rate must be a non-negative number, got {}", rate)
            }
            Self::YearsOutOfRange(years) => write!(
                f,
                "Years must be between {} and {}, got {}",
                MIN_YEARS, MAX_YEARS, years
            ),
        }
    }
}

impl std::error::Error for ProjectionValidationError {}
