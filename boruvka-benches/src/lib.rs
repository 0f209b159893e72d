//! Benchmark support crate for the Borůvka engine.
//!
//! Provides synthetic graph generation and parameter types used by the
//! Criterion contraction benchmarks.

pub mod error;
pub mod params;
pub mod source;
