//! Command-line parsing for the PCE metamodel evaluator.
//!
//! Argument parsing and dispatch stay separate from the numeric code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pce",
    version,
    about = "Base-isolation PCE metamodel evaluator (c1, c2, beta)"
)]
pub struct Cli {
    /// Directory holding the PCE_*_BASIS.csv / PCE_*_COEFS.csv tables.
    ///
    /// Defaults to $PCE_TABLES_DIR, then ./CSVfiles.
    #[arg(long, global = true, value_name = "DIR")]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the metamodel at one point.
    Eval(EvalArgs),
    /// Evaluate every row of a CSV file and print results as CSV.
    Batch(BatchArgs),
    /// Print the normalised Legendre basis at a mapped value.
    Basis(BasisArgs),
}

/// Physical inputs for a single evaluation.
#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// Superstructure first-mode period T1, in [0.1, 1].
    #[arg(long = "t1", allow_negative_numbers = true)]
    pub t1: f64,

    /// Isolator friction coefficient, in [0.03, 0.18].
    #[arg(long, allow_negative_numbers = true)]
    pub muf: f64,

    /// Mass ratio m1*/mtot, in [0.3, 0.9].
    #[arg(long, allow_negative_numbers = true)]
    pub mratio: f64,

    /// Isolation period Tb, in [3, 6].
    #[arg(long = "tb", allow_negative_numbers = true)]
    pub tb: f64,

    /// Response quantity of interest: D1 or u0.
    #[arg(long)]
    pub rqi: String,

    /// Intensity measure: SC or GM.
    #[arg(long)]
    pub im: String,

    /// Print JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

/// Options for batch evaluation.
#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// CSV with columns t1,muf,mratio,tb,rqi,im.
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,
}

/// Options for the basis diagnostic.
#[derive(Debug, Args, Clone)]
pub struct BasisArgs {
    /// Value on the canonical interval [-1, 1].
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,
}
