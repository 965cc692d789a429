//! Output records for projections

use serde::{Deserialize, Serialize};

/// Future value summary at the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Projected balance at the horizon
    pub future_value: f64,

    /// Principal plus all monthly deposits
    pub total_contributions: f64,

    /// `future_value - total_contributions`
    pub total_interest: f64,
}

impl ProjectionResult {
    /// Build a result, deriving interest from the other two figures
    pub fn new(future_value: f64, total_contributions: f64) -> Self {
        Self {
            future_value,
            total_contributions,
            total_interest: future_value - total_contributions,
        }
    }
}

/// Balance decomposition at the end of one whole year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyDataPoint {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

impl YearlyDataPoint {
    pub fn new(year: u32, balance: f64, contributions: f64) -> Self {
        Self {
            year,
            balance,
            contributions,
            interest: balance - contributions,
        }
    }
}

/// Projection at one tested rate of a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSweepPoint {
    /// Tested annual rate, in percent
    pub rate: f64,
    pub future_value: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

impl RateSweepPoint {
    pub fn new(rate: f64, result: ProjectionResult) -> Self {
        Self {
            rate,
            future_value: result.future_value,
            total_contributions: result.total_contributions,
            total_interest: result.total_interest,
        }
    }

    /// The projection part of this point, without the rate
    pub fn result(&self) -> ProjectionResult {
        ProjectionResult {
            future_value: self.future_value,
            total_contributions: self.total_contributions,
            total_interest: self.total_interest,
        }
    }
}
