//! Domain types used throughout the evaluation.
//!
//! This module defines:
//!
//! - the input variables and categorical selectors (`Variable`, `Rqi`, `Im`)
//! - table keys and sparse expansion rows (`TableKey`, `PceTerm`, `PceTable`)
//! - evaluation inputs/outputs (`RawInput`, `PhysicalInput`, `PceResult`)
//! - input range validation (`input`)

pub mod input;
pub mod types;

pub use types::*;
