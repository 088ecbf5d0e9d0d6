//! Reporting utilities: text and JSON rendering of evaluations.

pub mod format;

pub use format::*;
