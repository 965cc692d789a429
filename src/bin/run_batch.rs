//! Project every plan in a plan file
//!
//! Reads a CSV with columns
//! `PlanID,InitialPrincipal,MonthlyContribution,AnnualRatePercent,Frequency,Years`
//! and writes one summary row per plan.

use anyhow::Context;
use clap::Parser;
use compound_projection::plan::load_plans;
use compound_projection::project_plans;
use compound_projection::report::write_batch_summary;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Project every savings plan in a CSV plan file")]
struct Args {
    /// Plan file to read
    input: PathBuf,

    /// Summary CSV to write
    #[arg(short, long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let plans = load_plans(&args.input)
        .with_context(|| format!("Failed to load plans from {}", args.input.display()))?;
    info!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    let proj_start = Instant::now();
    let outcomes = project_plans(&plans)?;
    info!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_batch_summary(BufWriter::new(file), &outcomes)?;

    let total_fv: f64 = outcomes.iter().map(|o| o.result.future_value).sum();
    let total_contrib: f64 = outcomes.iter().map(|o| o.result.total_contributions).sum();

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Plans:               {}", outcomes.len());
    println!("  Total Future Value:  {:.2}", total_fv);
    println!("  Total Contributions: {:.2}", total_contrib);
    println!("  Total Interest:      {:.2}", total_fv - total_contrib);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
