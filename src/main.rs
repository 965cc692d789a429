//! Compound Projection CLI
//!
//! Projects one savings plan and prints the summary, the yearly breakdown and
//! the rate sensitivity table.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --initial 10000 --monthly 500 --years 10 --rate 7 --frequency monthly
//! cargo run -- --config plan.json --csv projection_output.csv
//! cargo run -- --json
//! ```
//!
//! Flags override values from `--config`. Set `RUST_LOG=debug` for engine logging.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compound_projection::report::write_csv_report;
use compound_projection::{CompoundingFrequency, PlanConfig, ProjectionReport};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFrequency {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
    Daily,
}

impl From<CliFrequency> for CompoundingFrequency {
    fn from(value: CliFrequency) -> Self {
        match value {
            CliFrequency::Annually => CompoundingFrequency::Annually,
            CliFrequency::Semiannually => CompoundingFrequency::Semiannually,
            CliFrequency::Quarterly => CompoundingFrequency::Quarterly,
            CliFrequency::Monthly => CompoundingFrequency::Monthly,
            CliFrequency::Daily => CompoundingFrequency::Daily,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "compound_projection")]
#[command(about = "Project compound growth of a savings plan with monthly contributions")]
struct Args {
    /// JSON plan config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial investment
    #[arg(long)]
    initial: Option<f64>,

    /// Monthly contribution (negative for withdrawals)
    #[arg(long, allow_hyphen_values = true)]
    monthly: Option<f64>,

    /// Length of time in years
    #[arg(long, allow_hyphen_values = true)]
    years: Option<i64>,

    /// Estimated annual interest rate, in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Compounding frequency
    #[arg(long, value_enum)]
    frequency: Option<CliFrequency>,

    /// Raw compounding periods per year, overrides --frequency
    #[arg(long)]
    compounds_per_year: Option<u32>,

    /// Half-width of the rate sensitivity band, in percentage points
    #[arg(long)]
    variance: Option<f64>,

    /// Spacing between tested rates, in percentage points
    #[arg(long)]
    step: Option<f64>,

    /// Write the CSV export to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Args {
    fn plan_config(&self) -> anyhow::Result<PlanConfig> {
        let mut config = match &self.config {
            Some(path) => PlanConfig::from_json_path(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => PlanConfig::default(),
        };

        if let Some(v) = self.initial {
            config.initial_principal = v;
        }
        if let Some(v) = self.monthly {
            config.monthly_contribution = v;
        }
        if let Some(v) = self.years {
            config.years = v;
        }
        if let Some(v) = self.rate {
            config.annual_rate_percent = v;
        }
        if let Some(v) = self.frequency {
            config.frequency = v.into();
            config.compounds_per_year = None;
        }
        if let Some(v) = self.compounds_per_year {
            config.compounds_per_year = Some(v);
        }
        if let Some(v) = self.variance {
            config.variance_range = v;
        }
        if let Some(v) = self.step {
            config.rate_step = v;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.plan_config()?;
    let params = config.parameters()?;
    let report = ProjectionReport::build(&params, config.sweep())?;
    info!(
        "Projected {} years at {}% with {} rates in the sweep",
        params.years,
        params.annual_rate_percent,
        report.rate_sweep.len()
    );

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_csv_report(BufWriter::new(file), &report)?;
        info!("CSV report written to {}", path.display());
    }

    if args.json {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    print_tables(&report);

    if let Some(path) = &args.csv {
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_tables(report: &ProjectionReport) {
    let params = &report.params;
    let result = &report.result;

    println!("Compound Interest Projection");
    println!("============================\n");

    println!("Inputs:");
    println!("  Initial Investment:   {:.2}", params.initial_principal);
    println!("  Monthly Contribution: {:.2}", params.monthly_contribution);
    println!("  Years:                {}", params.years);
    println!("  Interest Rate:        {}%", params.annual_rate_percent);
    match params.frequency() {
        Some(freq) => println!("  Compounding:          {}", freq),
        None => println!("  Compounding:          {} per year", params.compounds_per_year),
    }
    println!();

    println!("Results:");
    println!("  Future Value:          {:.2}", result.future_value);
    println!("  Total Contributions:   {:.2}", result.total_contributions);
    println!("  Total Interest Earned: {:.2}", result.total_interest);
    println!();

    println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Balance", "Contributions", "Interest");
    println!("{}", "-".repeat(55));
    for row in &report.timeline {
        println!(
            "{:>4} {:>16.2} {:>16.2} {:>16.2}",
            row.year, row.balance, row.contributions, row.interest
        );
    }
    println!();

    println!(
        "Rate sensitivity (±{} by {}):",
        report.sweep_settings.variance_range, report.sweep_settings.step
    );
    println!("{:>7} {:>16} {:>16}", "Rate", "Future Value", "Interest");
    println!("{}", "-".repeat(41));
    for row in &report.rate_sweep {
        let marker = if row.rate == params.annual_rate_percent { " <" } else { "" };
        println!(
            "{:>6.1}% {:>16.2} {:>16.2}{}",
            row.rate, row.future_value, row.total_interest, marker
        );
    }
}
