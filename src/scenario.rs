//! Rate sensitivity sweeps and batch projections
//!
//! Every point of a sweep, and every plan of a batch, is an independent
//! projection, so both run on the rayon pool. Results keep input order.

use crate::error::{ProjectionError, Result};
use crate::plan::{FinancialParameters, Plan};
use crate::projection::{ProjectionEngine, ProjectionResult, RateSweepPoint};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default half-width of the rate band, in percentage points
pub const DEFAULT_VARIANCE_RANGE: f64 = 2.0;

/// Default spacing between tested rates, in percentage points
pub const DEFAULT_RATE_STEP: f64 = 0.5;

// Absorbs representation error when the range is a whole number of steps
const STEP_TOLERANCE: f64 = 1e-9;

/// Shape of the band of rates tested around the base rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Half-width of the band, in percentage points
    pub variance_range: f64,
    /// Spacing between tested rates, in percentage points
    pub step: f64,
}

impl SweepSettings {
    pub fn new(variance_range: f64, step: f64) -> Self {
        Self { variance_range, step }
    }

    /// Sweep the band around `params.annual_rate_percent`
    pub fn run(&self, params: &FinancialParameters) -> Result<Vec<RateSweepPoint>> {
        rate_sweep(params, self.variance_range, self.step)
    }

    /// Number of whole steps on each side of the base rate
    fn steps_each_side(&self) -> Result<i64> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ProjectionError::invalid(
                "step",
                format!("rate step must be a positive number, got {}", self.step),
            ));
        }
        if !(self.variance_range.is_finite() && self.variance_range >= 0.0) {
            return Err(ProjectionError::invalid(
                "variance_range",
                format!("variance range must be non-negative, got {}", self.variance_range),
            ));
        }

        Ok((self.variance_range / self.step + STEP_TOLERANCE).floor() as i64)
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANCE_RANGE, DEFAULT_RATE_STEP)
    }
}

/// Project at `base + k * step` for every whole `k` within `variance_range`
///
/// Rates below zero are left out. Points come back in ascending rate order.
/// Fails before computing anything if the base parameters or the band are invalid.
pub fn rate_sweep(
    params: &FinancialParameters,
    variance_range: f64,
    step: f64,
) -> Result<Vec<RateSweepPoint>> {
    let engine = ProjectionEngine::new(*params)?;
    let settings = SweepSettings::new(variance_range, step);
    let steps = settings.steps_each_side()?;
    let base_rate = params.annual_rate_percent;

    let points: Vec<RateSweepPoint> = (-steps..=steps)
        .into_par_iter()
        .filter_map(|k| {
            let mut rate = base_rate + k as f64 * step;
            // A band point that lands on zero can come out as a tiny negative
            if rate.abs() <= STEP_TOLERANCE * step {
                rate = 0.0;
            }
            if rate.is_nan() || rate < 0.0 {
                debug!("Skipping sweep rate {}%", rate);
                return None;
            }
            Some(RateSweepPoint::new(rate, engine.with_rate(rate).project()))
        })
        .collect();

    debug!(
        "Swept {} rates around {}% (±{} by {})",
        points.len(),
        base_rate,
        variance_range,
        step
    );

    Ok(points)
}

/// Projection of one plan from a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan_id: u32,
    pub params: FinancialParameters,
    pub result: ProjectionResult,
}

/// Project every plan in parallel
///
/// Fails if the engine rejects any plan; outcomes keep the order of `plans`.
pub fn project_plans(plans: &[Plan]) -> Result<Vec<PlanOutcome>> {
    plans
        .par_iter()
        .map(|plan| {
            let engine = ProjectionEngine::new(plan.params).map_err(|e| {
                debug!("Plan {} rejected: {}", plan.plan_id, e);
                e
            })?;
            Ok(PlanOutcome {
                plan_id: plan.plan_id,
                params: plan.params,
                result: engine.project(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::CompoundingFrequency;
    use crate::projection::project;
    use approx::assert_relative_eq;

    fn base_params() -> FinancialParameters {
        FinancialParameters::new(10_000.0, 500.0, 7.0, CompoundingFrequency::Monthly, 10)
    }

    #[test]
    fn test_default_band() {
        let points = SweepSettings::default().run(&base_params()).unwrap();
        let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();

        assert_eq!(rates, vec![5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0, 8.5, 9.0]);
    }

    #[test]
    fn test_midpoint_matches_projection() {
        let params = base_params();
        let points = rate_sweep(&params, 2.0, 0.5).unwrap();
        let expected = project(&params).unwrap();

        let mid = points[points.len() / 2];
        assert_eq!(mid.rate, params.annual_rate_percent);
        assert_eq!(mid.future_value, expected.future_value);
        assert_eq!(mid.total_interest, expected.total_interest);
    }

    #[test]
    fn test_points_ascending_and_growing() {
        let points = rate_sweep(&base_params(), 3.0, 0.25).unwrap();
        assert_eq!(points.len(), 25);

        for pair in points.windows(2) {
            assert!(pair[1].rate > pair[0].rate);
            assert!(pair[1].future_value > pair[0].future_value);
        }
        for point in &points {
            assert_eq!(point.total_contributions, 70_000.0);
            assert_eq!(point.total_interest, point.future_value - point.total_contributions);
        }
    }

    #[test]
    fn test_negative_rates_skipped() {
        let params = base_params().with_rate(1.0);
        let points = rate_sweep(&params, 2.0, 0.5).unwrap();
        let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();

        assert_eq!(rates, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(points[0].future_value, 10_000.0 + 500.0 * 120.0);
    }

    #[test]
    fn test_partial_step_excludes_endpoint() {
        let rates: Vec<f64> = rate_sweep(&base_params(), 1.2, 0.5)
            .unwrap()
            .iter()
            .map(|p| p.rate)
            .collect();

        assert_eq!(rates, vec![6.0, 6.5, 7.0, 7.5, 8.0]);
    }

    #[test]
    fn test_non_binary_step_keeps_endpoints() {
        let points = rate_sweep(&base_params(), 0.3, 0.1).unwrap();
        assert_eq!(points.len(), 7);
        assert_relative_eq!(points[0].rate, 6.7, epsilon = 1e-12);
        assert_relative_eq!(points[6].rate, 7.3, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_kept_with_non_binary_step() {
        let points = rate_sweep(&base_params().with_rate(0.3), 0.3, 0.1).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].rate, 0.0);
        assert_eq!(points[0].future_value, 10_000.0 + 500.0 * 120.0);
        assert_relative_eq!(points[6].rate, 0.6, epsilon = 1e-12);

        let points = rate_sweep(&base_params().with_rate(0.6), 0.6, 0.2).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].rate, 0.0);

        let points = rate_sweep(&base_params().with_rate(0.7), 0.7, 0.1).unwrap();
        assert_eq!(points.len(), 15);
        assert_eq!(points[0].rate, 0.0);
    }

    #[test]
    fn test_zero_variance_is_base_only() {
        let points = rate_sweep(&base_params(), 0.0, 0.5).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].rate, 7.0);
    }

    #[test]
    fn test_invalid_band() {
        assert!(rate_sweep(&base_params(), 2.0, 0.0).unwrap_err().is_invalid_parameter());
        assert!(rate_sweep(&base_params(), 2.0, -0.5).unwrap_err().is_invalid_parameter());
        assert!(rate_sweep(&base_params(), -1.0, 0.5).unwrap_err().is_invalid_parameter());
        assert!(rate_sweep(&base_params(), f64::NAN, 0.5).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_invalid_base_params_fail_whole_sweep() {
        let params = FinancialParameters {
            compounds_per_year: 0,
            ..base_params()
        };
        assert!(rate_sweep(&params, 2.0, 0.5).unwrap_err().is_invalid_parameter());

        // Some band rates would be valid, but the base rate is not
        let params = base_params().with_rate(-101.0);
        assert!(rate_sweep(&params, 200.0, 0.5).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_project_plans_keeps_order() {
        let plans: Vec<Plan> = (1..=20)
            .map(|id| Plan {
                plan_id: id,
                params: base_params().with_years(id),
            })
            .collect();

        let outcomes = project_plans(&plans).unwrap();
        assert_eq!(outcomes.len(), 20);
        for (outcome, plan) in outcomes.iter().zip(&plans) {
            assert_eq!(outcome.plan_id, plan.plan_id);
            assert_eq!(outcome.result, project(&plan.params).unwrap());
        }
    }

    #[test]
    fn test_project_plans_rejects_invalid_plan() {
        let plans = vec![
            Plan { plan_id: 1, params: base_params() },
            Plan {
                plan_id: 2,
                params: FinancialParameters {
                    compounds_per_year: 0,
                    ..base_params()
                },
            },
        ];
        assert!(project_plans(&plans).unwrap_err().is_invalid_parameter());
    }
}
