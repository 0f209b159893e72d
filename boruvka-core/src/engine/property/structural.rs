//! Property 2: Structural invariant verification.
//!
//! For any tree published by the concurrent engine, verifies:
//!
//! - **Acyclicity** - no cycles (union-find based detection).
//! - **Spanning** - the tree covers exactly the input component of its root.
//! - **Edge count** - `k - 1` edges for a component of `k` nodes, matching
//!   the reported `total_edge_count`.
//! - **Provenance** - every tree edge is an input edge and no self-loop.
//! - **Weight** - the reported total equals the sum of the tree edges.
//!
//! Disconnected fixtures run with the connectivity check disabled, so the
//! published tree spans whichever component finished first.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MinimumSpanningTree, WeightedEdge};

use super::helpers::{find_root, run_concurrent, weights_match};
use super::types::ContractionFixture;

const WORKERS: usize = 4;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &ContractionFixture) -> TestCaseResult {
    let tree = run_concurrent(fixture, WORKERS, false)?;

    validate_provenance(fixture, tree.edges())?;
    validate_acyclicity(fixture.graph.node_count(), tree.edges())?;
    validate_spanning(fixture, &tree)?;
    validate_totals(&tree)?;

    Ok(())
}

/// Verifies that every tree edge appears in the input and is not a loop.
fn validate_provenance(fixture: &ContractionFixture, edges: &[WeightedEdge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        if edge.source() == edge.target() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: self-loop on node {}",
                edge.source(),
            )));
        }
        if !fixture.graph.edges().contains(edge) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge:?} is not an input edge ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the tree using union-find.
fn validate_acyclicity(node_count: usize, edges: &[WeightedEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

/// Verifies that the tree spans the root's input component.
fn validate_spanning(fixture: &ContractionFixture, tree: &MinimumSpanningTree) -> TestCaseResult {
    let membership = input_membership(fixture);
    let root_component = membership[tree.root().get()];
    let component_size = membership
        .iter()
        .filter(|&&component| component == root_component)
        .count();

    if tree.edges().len() + 1 != component_size {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges but root component has {component_size} nodes ({})",
            tree.edges().len(),
            fixture.describe(),
        )));
    }

    for edge in tree.edges() {
        if membership[edge.source()] != root_component {
            return Err(TestCaseError::fail(format!(
                "edge {edge:?} leaves the root component ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

/// Verifies the reported totals against the tree edges.
fn validate_totals(tree: &MinimumSpanningTree) -> TestCaseResult {
    if tree.total_edge_count() != tree.edges().len() {
        return Err(TestCaseError::fail(format!(
            "total_edge_count {} but {} edges recorded",
            tree.total_edge_count(),
            tree.edges().len(),
        )));
    }
    let summed: f64 = tree.edges().iter().map(WeightedEdge::weight).sum();
    if !weights_match(summed, tree.total_weight()) {
        return Err(TestCaseError::fail(format!(
            "total_weight {} but edges sum to {summed}",
            tree.total_weight(),
        )));
    }
    Ok(())
}

/// Maps each node to the union-find root of its input component.
fn input_membership(fixture: &ContractionFixture) -> Vec<usize> {
    let node_count = fixture.graph.node_count();
    let mut parent: Vec<usize> = (0..node_count).collect();
    for edge in fixture.graph.edges() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            parent[rb] = ra;
        }
    }
    (0..node_count)
        .map(|node| find_root(&mut parent, node))
        .collect()
}
