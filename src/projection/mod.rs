//! Projection engine for compound growth and yearly breakdowns

mod engine;
pub mod growth;
mod results;

pub use engine::{project, timeline, validate, ProjectionEngine, YearlyPoints, MIN_ANNUAL_RATE_PERCENT};
pub use results::{ProjectionResult, RateSweepPoint, YearlyDataPoint};
