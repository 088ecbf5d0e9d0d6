//! Input/output helpers.
//!
//! - expansion table ingest (`tables`)
//! - table sources and caching (`source`)
//! - batch input CSV ingest (`batch`)
//! - batch result CSV output (`export`)

pub mod batch;
pub mod export;
pub mod source;
pub mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

pub use batch::*;
pub use export::*;
pub use source::*;
pub use tables::*;
