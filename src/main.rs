//! Land Use Report - USDA survey CSV analysis
//!
//! Loads the survey file and prints the answers to the five fixed
//! questions. Any failure to read the file ends the run; there is no
//! partial-answer mode.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use landuse_report::analysis;
use landuse_report::data;

#[derive(Parser)]
#[command(name = "landuse_report")]
#[command(about = "Answers five fixed questions over the USDA Major Land Use survey (1945-2012)")]
struct Cli {
    /// Path to the survey CSV file
    csv: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let records = data::load_records(&cli.csv)?;

    println!("Question 1: {}", analysis::max_grassland_region_1974(&records)?);
    println!("Question 2: {}", analysis::count_urban_states_before_1987(&records));
    println!("Question 3: {}", analysis::average_cropland_pasture_1964(&records)?);
    println!("Question 4: {}", analysis::max_forest_use_colony_state_2012(&records)?);
    println!("Question 5: {}", analysis::largest_regional_shift(&records)?);

    Ok(())
}
