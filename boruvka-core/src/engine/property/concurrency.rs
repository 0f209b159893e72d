//! Property 3: Concurrency safety.
//!
//! Runs the concurrent engine on the same input repeatedly with varying
//! worker counts and asserts that every run agrees on the total weight and
//! edge count. When the tree is unique the exact edge list must match too.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{run_concurrent, weights_match};
use super::types::ContractionFixture;
use crate::test_utils::concurrency_repetitions;

const WORKER_COUNTS: [usize; 3] = [2, 4, 8];

/// Runs the concurrency safety property for the given fixture.
///
/// Disconnected fixtures are covered by the equivalence property.
pub(super) fn run_concurrency_safety_property(fixture: &ContractionFixture) -> TestCaseResult {
    if fixture.graph.connected_components() > 1 {
        return Ok(());
    }

    let repetitions = concurrency_repetitions();
    let baseline = run_concurrent(fixture, 1, true)?;

    for run in 1..repetitions.max(2) {
        let workers = WORKER_COUNTS[run % WORKER_COUNTS.len()];
        let result = run_concurrent(fixture, workers, true)?;

        if !weights_match(result.total_weight(), baseline.total_weight()) {
            return Err(TestCaseError::fail(format!(
                "run {run} ({workers} workers): total weight diverged, baseline={}, run={} ({})",
                baseline.total_weight(),
                result.total_weight(),
                fixture.describe(),
            )));
        }

        if result.total_edge_count() != baseline.total_edge_count() {
            return Err(TestCaseError::fail(format!(
                "run {run} ({workers} workers): edge count diverged, baseline={}, run={} ({})",
                baseline.total_edge_count(),
                result.total_edge_count(),
                fixture.describe(),
            )));
        }

        if fixture.distribution.has_unique_tree() && result.edges() != baseline.edges() {
            return Err(TestCaseError::fail(format!(
                "run {run} ({workers} workers): edge list differs from baseline ({})",
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
