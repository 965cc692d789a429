//! Plan configuration files
//!
//! A JSON document describing one plan and its sensitivity band. Every field
//! is optional and falls back to the calculator's defaults:
//!
//! ```json
//! {
//!   "initial_principal": 25000,
//!   "monthly_contribution": 300,
//!   "years": 20,
//!   "annual_rate_percent": 6.5,
//!   "frequency": "Quarterly",
//!   "variance_range": 1.5
//! }
//! ```

use crate::error::Result;
use crate::plan::{CompoundingFrequency, FinancialParameters};
use crate::scenario::{SweepSettings, DEFAULT_RATE_STEP, DEFAULT_VARIANCE_RANGE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One plan plus its sweep band, as read from a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    #[serde(default = "default_initial_principal")]
    pub initial_principal: f64,

    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// Signed so that a negative horizon is reported rather than failing to parse
    #[serde(default = "default_years")]
    pub years: i64,

    #[serde(default = "default_annual_rate_percent")]
    pub annual_rate_percent: f64,

    #[serde(default)]
    pub frequency: CompoundingFrequency,

    /// Raw periods per year; takes precedence over `frequency` when set
    #[serde(default)]
    pub compounds_per_year: Option<u32>,

    #[serde(default = "default_variance_range")]
    pub variance_range: f64,

    #[serde(default = "default_rate_step")]
    pub rate_step: f64,
}

fn default_initial_principal() -> f64 { 10_000.0 }
fn default_monthly_contribution() -> f64 { 500.0 }
fn default_years() -> i64 { 10 }
fn default_annual_rate_percent() -> f64 { 7.0 }
fn default_variance_range() -> f64 { DEFAULT_VARIANCE_RANGE }
fn default_rate_step() -> f64 { DEFAULT_RATE_STEP }

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            initial_principal: default_initial_principal(),
            monthly_contribution: default_monthly_contribution(),
            years: default_years(),
            annual_rate_percent: default_annual_rate_percent(),
            frequency: CompoundingFrequency::default(),
            compounds_per_year: None,
            variance_range: default_variance_range(),
            rate_step: default_rate_step(),
        }
    }
}

impl PlanConfig {
    /// Read a config from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading plan config from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Periods per year after applying the raw override
    pub fn periods_per_year(&self) -> u32 {
        self.compounds_per_year
            .unwrap_or_else(|| self.frequency.periods_per_year())
    }

    /// Engine parameters for this plan; fails on a negative horizon
    pub fn parameters(&self) -> Result<FinancialParameters> {
        FinancialParameters::with_signed_years(
            self.initial_principal,
            self.monthly_contribution,
            self.annual_rate_percent,
            self.periods_per_year(),
            self.years,
        )
    }

    pub fn sweep(&self) -> SweepSettings {
        SweepSettings::new(self.variance_range, self.rate_step)
    }
}
