//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated input graph, verifies that the concurrent and
//! sequential engines agree with Kruskal on total weight and edge count,
//! and that disconnected inputs are rejected with the oracle's component
//! count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{BoruvkaError, ExecutionStrategy};

use super::helpers::{driver, run_concurrent, weights_match};
use super::oracle::sequential_kruskal;
use super::types::ContractionFixture;

const WORKERS: usize = 4;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &ContractionFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(&fixture.graph);

    if oracle.component_count > 1 {
        return expect_disconnected(fixture, oracle.component_count);
    }

    let concurrent = run_concurrent(fixture, WORKERS, true)?;
    let sequential = driver(1, ExecutionStrategy::Sequential, true)?
        .run(&fixture.graph)
        .map_err(|e| {
            TestCaseError::fail(format!("sequential run failed: {e} ({})", fixture.describe()))
        })?;

    for (engine, tree) in [("concurrent", &concurrent), ("sequential", &sequential)] {
        if !weights_match(tree.total_weight(), oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "{engine}: total weight {} differs from oracle {} ({})",
                tree.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }
        if tree.total_edge_count() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{engine}: edge count {} differs from oracle {} ({})",
                tree.total_edge_count(),
                oracle.edge_count,
                fixture.describe(),
            )));
        }
    }

    Ok(())
}

fn expect_disconnected(fixture: &ContractionFixture, expected: usize) -> TestCaseResult {
    match driver(WORKERS, ExecutionStrategy::Concurrent, true)?.run(&fixture.graph) {
        Err(BoruvkaError::Disconnected { components }) if components == expected => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "expected Disconnected {{ components: {expected} }}, got {other:?} ({})",
            fixture.describe(),
        ))),
    }
}
