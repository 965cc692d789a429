//! Savings plan parameters and compounding frequencies

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest is credited to the balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    Semiannually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// All named frequencies, least to most frequent
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::Semiannually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding periods in one year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Semiannually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Look up the named frequency for a raw period count
    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == periods)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::Semiannually => "Semiannually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ProjectionError::invalid(
                    "frequency",
                    format!("unknown compounding frequency `{}`", trimmed),
                )
            })
    }
}

/// Inputs to every projection
///
/// The record is plain data: the engine checks the domain of
/// `compounds_per_year` and `annual_rate_percent` on each call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialParameters {
    /// Starting balance
    pub initial_principal: f64,

    /// Deposit added each calendar month (negative for withdrawals)
    pub monthly_contribution: f64,

    /// Nominal annual rate as a percentage (7.0 = 7%)
    pub annual_rate_percent: f64,

    /// Compounding periods per year
    pub compounds_per_year: u32,

    /// Projection horizon in whole years
    pub years: u32,
}

impl FinancialParameters {
    pub fn new(
        initial_principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        frequency: CompoundingFrequency,
        years: u32,
    ) -> Self {
        Self {
            initial_principal,
            monthly_contribution,
            annual_rate_percent,
            compounds_per_year: frequency.periods_per_year(),
            years,
        }
    }

    /// Build parameters from a signed horizon, as read from config files and forms
    pub fn with_signed_years(
        initial_principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        compounds_per_year: u32,
        years: i64,
    ) -> Result<Self> {
        let years = u32::try_from(years).map_err(|_| {
            ProjectionError::invalid("years", format!("horizon must be non-negative, got {}", years))
        })?;

        Ok(Self {
            initial_principal,
            monthly_contribution,
            annual_rate_percent,
            compounds_per_year,
            years,
        })
    }

    /// Copy of these parameters at a different annual rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..*self
        }
    }

    /// Copy of these parameters over a shorter or longer horizon
    pub fn with_years(&self, years: u32) -> Self {
        Self { years, ..*self }
    }

    /// Named frequency, if `compounds_per_year` matches one
    pub fn frequency(&self) -> Option<CompoundingFrequency> {
        CompoundingFrequency::from_periods(self.compounds_per_year)
    }
}

impl Default for FinancialParameters {
    fn default() -> Self {
        Self::new(10_000.0, 500.0, 7.0, CompoundingFrequency::Monthly, 10)
    }
}

/// A named set of parameters, one row of a plan file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_id: u32,
    pub params: FinancialParameters,
}
