//! Metamodel evaluation.
//!
//! Kept as small, pure functions so the orchestrator only wires inputs,
//! tables and the shared basis together.

pub mod expansion;

pub use expansion::*;
