//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Run integer inputs through a fail-fast outcome pipeline
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "outcome")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Integers to process
    #[arg(required = true, allow_negative_numbers = true)]
    pub inputs: Vec<String>,

    /// Configuration file path
    #[arg(short, long, env = "OUTCOME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Value reported for inputs that fail
    #[arg(short, long, allow_negative_numbers = true)]
    pub default: Option<i64>,

    /// Divisor applied by the last pipeline step
    #[arg(long)]
    pub divisor: Option<i64>,

    /// Print the total of all values after the per-input lines
    #[arg(long)]
    pub sum: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
