//! Shared helper functions for contraction property tests.

use proptest::test_runner::TestCaseError;

use crate::{Boruvka, BoruvkaBuilder, ExecutionStrategy, MinimumSpanningTree};

use super::types::ContractionFixture;

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Compares two weight totals accumulated in different orders.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Builds a driver with the given settings.
pub(super) fn driver(
    workers: usize,
    strategy: ExecutionStrategy,
    connectivity_check: bool,
) -> Result<Boruvka, TestCaseError> {
    BoruvkaBuilder::new()
        .with_workers(workers)
        .with_execution_strategy(strategy)
        .with_connectivity_check(connectivity_check)
        .build()
        .map_err(|e| TestCaseError::fail(format!("builder rejected configuration: {e}")))
}

/// Runs the concurrent engine on a fixture that is expected to succeed.
pub(super) fn run_concurrent(
    fixture: &ContractionFixture,
    workers: usize,
    connectivity_check: bool,
) -> Result<MinimumSpanningTree, TestCaseError> {
    driver(workers, ExecutionStrategy::Concurrent, connectivity_check)?
        .run(&fixture.graph)
        .map_err(|e| {
            TestCaseError::fail(format!(
                "concurrent run with {workers} workers failed: {e} ({})",
                fixture.describe(),
            ))
        })
}
