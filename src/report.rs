//! Export of projection outputs
//!
//! Plain numbers only: amounts to two decimals and rates to one, with no
//! currency symbols or digit grouping. Rendering those is left to the viewer.

use crate::error::Result;
use crate::plan::FinancialParameters;
use crate::projection::{ProjectionEngine, ProjectionResult, RateSweepPoint, YearlyDataPoint};
use crate::scenario::{rate_sweep, PlanOutcome, SweepSettings};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Everything the calculator shows for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub params: FinancialParameters,
    pub sweep_settings: SweepSettings,
    pub result: ProjectionResult,
    pub timeline: Vec<YearlyDataPoint>,
    pub rate_sweep: Vec<RateSweepPoint>,
}

impl ProjectionReport {
    /// Run all three projections; nothing is built if any input is invalid
    pub fn build(params: &FinancialParameters, sweep_settings: SweepSettings) -> Result<Self> {
        let engine = ProjectionEngine::new(*params)?;
        let params = *engine.params();
        let sweep = rate_sweep(&params, sweep_settings.variance_range, sweep_settings.step)?;

        Ok(Self {
            params,
            sweep_settings,
            result: engine.project(),
            timeline: engine.timeline(),
            rate_sweep: sweep,
        })
    }

    /// The sweep point at the base rate, if the band kept it
    pub fn base_rate_point(&self) -> Option<&RateSweepPoint> {
        self.rate_sweep
            .iter()
            .find(|p| p.rate == self.params.annual_rate_percent)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn frequency_label(params: &FinancialParameters) -> String {
    match params.frequency() {
        Some(freq) => freq.to_string(),
        None => format!("{} per year", params.compounds_per_year),
    }
}

/// Write the sectioned CSV export of a report
pub fn write_csv_report<W: Write>(mut writer: W, report: &ProjectionReport) -> Result<()> {
    let params = &report.params;
    let result = &report.result;

    writeln!(writer, "COMPOUND INTEREST PROJECTION")?;
    writeln!(writer)?;

    writeln!(writer, "INPUT PARAMETERS")?;
    writeln!(writer, "Initial Investment,{:.2}", params.initial_principal)?;
    writeln!(writer, "Monthly Contribution,{:.2}", params.monthly_contribution)?;
    writeln!(writer, "Length of Time,{} years", params.years)?;
    writeln!(writer, "Interest Rate,{}%", params.annual_rate_percent)?;
    writeln!(writer, "Compound Frequency,{}", frequency_label(params))?;
    writeln!(writer)?;

    writeln!(writer, "MAIN RESULTS")?;
    writeln!(writer, "Future Value,{:.2}", result.future_value)?;
    writeln!(writer, "Total Contributions,{:.2}", result.total_contributions)?;
    writeln!(writer, "Total Interest Earned,{:.2}", result.total_interest)?;
    writeln!(writer)?;

    writeln!(writer, "YEAR-BY-YEAR BREAKDOWN")?;
    writeln!(writer, "Year,Balance,Contributions,Interest")?;
    for row in &report.timeline {
        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2}",
            row.year, row.balance, row.contributions, row.interest
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "INTEREST RATE VARIANCE ANALYSIS")?;
    writeln!(writer, "Rate,Future Value,Total Interest")?;
    for row in &report.rate_sweep {
        writeln!(
            writer,
            "{:.1}%,{:.2},{:.2}",
            row.rate, row.future_value, row.total_interest
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one summary row per batch plan
pub fn write_batch_summary<W: Write>(writer: W, outcomes: &[PlanOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "PlanID",
        "Years",
        "AnnualRatePercent",
        "CompoundsPerYear",
        "FutureValue",
        "TotalContributions",
        "TotalInterest",
    ])?;

    for outcome in outcomes {
        csv_writer.write_record([
            outcome.plan_id.to_string(),
            outcome.params.years.to_string(),
            outcome.params.annual_rate_percent.to_string(),
            outcome.params.compounds_per_year.to_string(),
            format!("{:.2}", outcome.result.future_value),
            format!("{:.2}", outcome.result.total_contributions),
            format!("{:.2}", outcome.result.total_interest),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
