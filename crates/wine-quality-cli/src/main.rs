//! wine-quality - predict wine quality from physicochemical measurements
//!
//! Fits an ordinary least squares model by the normal equations and uses
//! it to score new samples.
//!
//! Usage:
//!   wine-quality fit winequality-red.csv                  # Fit and report coefficients
//!   wine-quality fit winequality-red.csv --save beta.json # Fit and persist coefficients
//!   wine-quality predict winequality-red.csv              # Fit, then prompt for 11 values
//!   wine-quality predict --model beta.json --values 7.4,0.7,...

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;
mod prompt;

use commands::{fit, predict};
use output::OutputMode;

/// wine-quality - linear regression on wine measurements
///
/// Reads a CSV whose last column is the quality score, fits the
/// coefficients and predicts quality for new samples.
#[derive(Parser)]
#[command(name = "wine-quality")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors and results only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit coefficients on a CSV dataset and report them
    Fit {
        /// Path to the CSV dataset (header row, target in the last column)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Treat unparseable numeric fields as 0.0 instead of failing
        #[arg(long)]
        lenient: bool,

        /// Pivots with absolute value at or below this are singular
        #[arg(long, value_name = "T", default_value_t = 0.0)]
        pivot_tolerance: f64,

        /// Write fitted coefficients as JSON
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Predict quality for one sample
    Predict {
        /// CSV dataset to fit before predicting
        #[arg(value_name = "DATA", required_unless_present = "model")]
        data: Option<PathBuf>,

        /// Previously saved coefficients (JSON) instead of fitting
        #[arg(long, value_name = "FILE", conflicts_with = "data")]
        model: Option<PathBuf>,

        /// Feature values, comma separated; prompts on stdin when absent
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<f64>>,

        /// Treat unparseable numeric fields as 0.0 instead of failing
        #[arg(long)]
        lenient: bool,

        /// Pivots with absolute value at or below this are singular
        #[arg(long, value_name = "T", default_value_t = 0.0)]
        pivot_tolerance: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode {
        json: cli.json,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Fit {
            data,
            lenient,
            pivot_tolerance,
            save,
        } => fit::run(&data, lenient, pivot_tolerance, save.as_deref(), mode),

        Commands::Predict {
            data,
            model,
            values,
            lenient,
            pivot_tolerance,
        } => predict::Source::from_args(model, data, lenient, pivot_tolerance)
            .and_then(|source| predict::run(&source, values, mode)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
