//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise while preparing benchmark
//! inputs so setup functions can propagate failures with `?`.

use crate::source::SyntheticError;
use boruvka_core::BoruvkaError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Engine configuration or contraction failed.
    #[error("contraction failed: {0}")]
    Boruvka(#[from] BoruvkaError),
}
