//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the table directory
//! - runs the evaluation pipeline
//! - prints reports

use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::cli::{BasisArgs, BatchArgs, Cli, Command, EvalArgs};
use crate::domain::RawInput;
use crate::error::AppError;
use crate::io::source::{CachedTableSource, CsvTableSource};

pub mod pipeline;

/// Entry point for the `pce` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let source = CsvTableSource::from_env(cli.tables.as_deref());
    info!(dir = %source.base_dir().display(), "using table directory");

    match cli.command {
        Command::Eval(args) => handle_eval(&source, args),
        Command::Batch(args) => handle_batch(source, args),
        Command::Basis(args) => handle_basis(args),
    }
}

fn handle_eval(source: &CsvTableSource, args: EvalArgs) -> Result<(), AppError> {
    let raw = raw_input_from_args(&args);
    let input = raw.validate()?;
    let result = pipeline::evaluate_input(source, &input)?;

    if args.json {
        println!("{}", crate::report::result_json(&input, &result)?);
    } else {
        println!("{}", crate::report::format_result(&input, &result));
    }
    Ok(())
}

fn handle_batch(source: CsvTableSource, args: BatchArgs) -> Result<(), AppError> {
    let batch = crate::io::batch::load_batch(&args.input)?;
    let source = CachedTableSource::new(source);
    let outcomes = pipeline::run_batch(&source, &batch)?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    crate::io::export::write_batch_csv(&mut lock, &outcomes)?;
    lock.flush()
        .map_err(|e| AppError::output(format!("Failed to flush stdout: {e}")))?;
    Ok(())
}

fn handle_basis(args: BasisArgs) -> Result<(), AppError> {
    print!("{}", crate::report::format_basis(args.x));
    Ok(())
}

pub fn raw_input_from_args(args: &EvalArgs) -> RawInput {
    RawInput::new(
        args.t1,
        args.muf,
        args.mratio,
        args.tb,
        args.rqi.clone(),
        args.im.clone(),
    )
}
