//! `pce-isolation` library crate.
//!
//! Evaluates a precomputed polynomial chaos expansion that predicts the
//! response coefficients `(c1, c2, beta)` of a sliding base-isolated structure
//! from four physical parameters and two categorical selectors.
//!
//! The binary (`pce`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the evaluator can be embedded with tables from any `TableSource`

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;

pub use app::pipeline::{evaluate_input, run_pce};
pub use domain::{Im, PceResult, PhysicalInput, RawInput, Rqi};
pub use error::{AppError, ErrorKind};
