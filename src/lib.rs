//! Compound Projection - growth projections for savings plans with monthly contributions
//!
//! This library provides:
//! - Future value of a lump sum plus monthly deposits at any compounding frequency
//! - Year-by-year balance, contribution and interest breakdowns
//! - Rate sensitivity sweeps around a base rate
//! - Plan config and plan-file loading, CSV and JSON export
//!
//! The engine itself is pure: it takes a [`FinancialParameters`] value and
//! returns fresh results, with no I/O and no shared state.
//!
//! ```
//! use compound_projection::{project, CompoundingFrequency, FinancialParameters};
//!
//! let params = FinancialParameters::new(10_000.0, 500.0, 7.0, CompoundingFrequency::Monthly, 10);
//! let result = project(&params).unwrap();
//! assert_eq!(result.total_contributions, 70_000.0);
//! ```

pub mod config;
pub mod error;
pub mod plan;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use config::PlanConfig;
pub use error::{ProjectionError, Result};
pub use plan::{CompoundingFrequency, FinancialParameters, Plan};
pub use projection::{
    project, timeline, ProjectionEngine, ProjectionResult, RateSweepPoint, YearlyDataPoint,
};
pub use report::ProjectionReport;
pub use scenario::{project_plans, rate_sweep, SweepSettings};
