//! Load savings plans from a CSV plan file

use super::{CompoundingFrequency, FinancialParameters, Plan};
use crate::error::{ProjectionError, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the plan file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "InitialPrincipal")]
    initial_principal: f64,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "AnnualRatePercent")]
    annual_rate_percent: f64,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "Years")]
    years: i64,
}

impl CsvRow {
    fn into_plan(self, row: usize) -> Result<Plan> {
        let frequency = self
            .frequency
            .parse::<CompoundingFrequency>()
            .map_err(|_| ProjectionError::InvalidRecord {
                row,
                message: format!("Unknown Frequency: {}", self.frequency),
            })?;

        let params = FinancialParameters::with_signed_years(
            self.initial_principal,
            self.monthly_contribution,
            self.annual_rate_percent,
            frequency.periods_per_year(),
            self.years,
        )
        .map_err(|e| ProjectionError::InvalidRecord {
            row,
            message: e.to_string(),
        })?;

        Ok(Plan {
            plan_id: self.plan_id,
            params,
        })
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<Plan>> {
    let file = File::open(path.as_ref())?;
    debug!("Loading plans from {}", path.as_ref().display());
    load_plans_from_reader(file)
}

/// Load plans from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<Vec<Plan>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut plans = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        plans.push(row.into_plan(idx + 1)?);
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "PlanID,InitialPrincipal,MonthlyContribution,AnnualRatePercent,Frequency,Years\n";

    #[test]
    fn test_load_plans() {
        let csv = format!(
            "{}1,10000,500,7,Monthly,10\n2, 2500.5 ,0,4.25,Quarterly,30\n3,0,100,0,daily,5\n",
            HEADER
        );
        let plans = load_plans_from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(plans.len(), 3);

        assert_eq!(plans[0].plan_id, 1);
        assert_eq!(plans[0].params, FinancialParameters::default());

        assert_eq!(plans[1].params.initial_principal, 2500.5);
        assert_eq!(plans[1].params.compounds_per_year, 4);
        assert_eq!(plans[1].params.years, 30);

        assert_eq!(plans[2].params.compounds_per_year, 365);
    }

    #[test]
    fn test_unknown_frequency_names_row() {
        let csv = format!("{}1,10000,500,7,Monthly,10\n2,10000,500,7,Weekly,10\n", HEADER);
        let err = load_plans_from_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ProjectionError::InvalidRecord { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("Weekly"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_years_rejected() {
        let csv = format!("{}7,10000,500,7,Annually,-2\n", HEADER);
        let err = load_plans_from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidRecord { row: 1, .. }));
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let csv = format!("{}1,ten thousand,500,7,Monthly,10\n", HEADER);
        let err = load_plans_from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_load_sample_plans() {
        let plans = load_plans("data/sample_plans.csv").expect("Failed to load plans");
        assert_eq!(plans.len(), 5);

        let ids: Vec<u32> = plans.iter().map(|p| p.plan_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(plans[3].params.monthly_contribution, -250.0);
        assert_eq!(plans[3].params.compounds_per_year, 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_plans("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
