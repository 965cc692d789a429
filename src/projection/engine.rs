//! Core projection engine for compound growth with monthly contributions

use super::growth::{balance_after, contributions_after};
use super::results::{ProjectionResult, YearlyDataPoint};
use crate::error::{ProjectionError, Result};
use crate::plan::FinancialParameters;
use log::{debug, trace};
use std::ops::RangeInclusive;

/// Lowest accepted annual rate, in percent. Below it `1 + r/n` can go negative.
pub const MIN_ANNUAL_RATE_PERCENT: f64 = -100.0;

/// Check the parameters against the engine's domain
pub fn validate(params: &FinancialParameters) -> Result<()> {
    if params.compounds_per_year == 0 {
        debug!("Rejecting parameters: zero compounding periods per year");
        return Err(ProjectionError::invalid(
            "compounds_per_year",
            "must be a positive number of periods per year",
        ));
    }

    // NaN falls through here and is trusted like any other number
    if params.annual_rate_percent < MIN_ANNUAL_RATE_PERCENT {
        debug!(
            "Rejecting parameters: annual rate {}% below {}%",
            params.annual_rate_percent, MIN_ANNUAL_RATE_PERCENT
        );
        return Err(ProjectionError::invalid(
            "annual_rate_percent",
            format!(
                "{}% is below the minimum of {}%",
                params.annual_rate_percent, MIN_ANNUAL_RATE_PERCENT
            ),
        ));
    }

    Ok(())
}

/// Projection engine bound to one validated parameter set
///
/// Construction validates once, so every operation on an engine is infallible.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    params: FinancialParameters,
}

impl ProjectionEngine {
    /// Create an engine, rejecting parameters outside the engine's domain
    pub fn new(params: FinancialParameters) -> Result<Self> {
        validate(&params)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FinancialParameters {
        &self.params
    }

    /// Same plan at another rate; callers keep the rate within the domain
    pub(crate) fn with_rate(&self, annual_rate_percent: f64) -> Self {
        debug_assert!(annual_rate_percent >= MIN_ANNUAL_RATE_PERCENT);
        Self {
            params: self.params.with_rate(annual_rate_percent),
        }
    }

    /// Future value summary at the full horizon
    pub fn project(&self) -> ProjectionResult {
        self.project_through(self.params.years)
    }

    /// Future value summary after `year` whole years
    pub fn project_through(&self, year: u32) -> ProjectionResult {
        let p = &self.params;
        let periods = p.compounds_per_year as u64 * year as u64;

        let future_value = balance_after(
            p.initial_principal,
            p.monthly_contribution,
            p.annual_rate_percent / 100.0,
            p.compounds_per_year,
            periods,
        );
        let total_contributions = contributions_after(p.initial_principal, p.monthly_contribution, year);

        trace!(
            "Projected {} periods at {}%: fv={:.2} contributions={:.2}",
            periods,
            p.annual_rate_percent,
            future_value,
            total_contributions
        );

        ProjectionResult::new(future_value, total_contributions)
    }

    /// Yearly snapshots for years 0 through the horizon
    pub fn timeline(&self) -> Vec<YearlyDataPoint> {
        self.yearly_points().collect()
    }

    /// Lazy yearly snapshots; clone the iterator to restart it
    pub fn yearly_points(&self) -> YearlyPoints {
        YearlyPoints {
            engine: *self,
            years: 0..=self.params.years,
        }
    }

    fn snapshot(&self, year: u32) -> YearlyDataPoint {
        let result = self.project_through(year);
        YearlyDataPoint::new(year, result.future_value, result.total_contributions)
    }
}

/// Iterator over yearly snapshots
///
/// Each point is computed from its year alone, so the sequence carries no
/// state besides the remaining years.
#[derive(Debug, Clone)]
pub struct YearlyPoints {
    engine: ProjectionEngine,
    years: RangeInclusive<u32>,
}

impl Iterator for YearlyPoints {
    type Item = YearlyDataPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.years.next().map(|year| self.engine.snapshot(year))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.years.size_hint()
    }
}

impl DoubleEndedIterator for YearlyPoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.years.next_back().map(|year| self.engine.snapshot(year))
    }
}

/// Future value, total contributions and interest at the horizon
pub fn project(params: &FinancialParameters) -> Result<ProjectionResult> {
    Ok(ProjectionEngine::new(*params)?.project())
}

/// Year-by-year breakdown, `params.years + 1` points starting at year 0
pub fn timeline(params: &FinancialParameters) -> Result<Vec<YearlyDataPoint>> {
    Ok(ProjectionEngine::new(*params)?.timeline())
}
