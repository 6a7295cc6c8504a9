//! Growth projector
//!
//! Annual compounding only: `total = P * (1 + R/100)^year`. The general
//! `A = P(1 + r/n)^(nt)` form shown in the UI is evaluated with n = 1.

use log::debug;

use crate::error::{WealthError, WealthResult};
use crate::models::{Projection, ProjectionPoint, ProjectionRequest};

/// Project `principal` forward `years` years at `rate_percent` per year
///
/// Returns `years + 1` points, year 0 through `years` inclusive. Pure and
/// total: callers are expected to have validated the inputs already, and
/// overflow at extreme inputs is not guarded.
pub fn project(principal: f64, rate_percent: f64, years: u32) -> Vec<ProjectionPoint> {
    let growth = 1.0 + rate_percent / 100.0;

    let mut points = Vec::with_capacity(years as usize + 1);
    points.push(ProjectionPoint {
        year: 0,
        principal,
        interest: 0.0,
        total: principal,
    });

    for year in 1..=years {
        let total = principal * growth.powi(year as i32);
        points.push(ProjectionPoint {
            year,
            principal,
            interest: total - principal,
            total,
        });
    }

    points
}

/// Validate a request and compute its projection
pub fn build_projection(request: ProjectionRequest) -> WealthResult<Projection> {
    request
        .validate()
        .map_err(|e| WealthError::Validation(e.to_string()))?;

    let points = project(
        request.principal as f64,
        request.annual_rate_percent,
        request.years,
    );

    let projection = Projection { request, points };
    debug!(
        "event=projection_computed years={} rate={} final_total={:.0}",
        request.years,
        request.annual_rate_percent,
        projection.final_total()
    );

    Ok(projection)
}
