//! Strategy builders for contraction property tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies designed to stress the lock protocol.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{InputGraph, WeightedEdge};

use super::types::{ContractionFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 32;

/// Generates fixtures covering all five weight distributions.
pub(super) fn fixture_strategy() -> impl Strategy<Value = ContractionFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Used by rstest cases where the distribution is chosen explicitly rather
/// than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> ContractionFixture {
    let graph = match distribution {
        WeightDistribution::Unique => generate_continuous(rng, MAX_NODES, (0.2, 0.6)),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_continuous(rng, DENSE_MAX_NODES, (0.7, 0.95)),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    ContractionFixture {
        graph,
        distribution,
    }
}

/// Adds each unique pair with a sampled probability. A random spanning
/// path is laid first so the graph is connected.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> InputGraph {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = spanning_path(node_count, rng, &mut weight);

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                edges.push(WeightedEdge::new(i, j, w));
            }
        }
    }

    InputGraph::new(node_count, edges)
}

fn generate_continuous(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
) -> InputGraph {
    generate_probabilistic(rng, max_nodes, edge_prob_range, |r| r.gen_range(0.1..100.0))
}

/// Draws every weight from a pool of one to three small integers.
fn generate_identical_weights(rng: &mut SmallRng) -> InputGraph {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    generate_probabilistic(rng, MAX_NODES, (0.3, 0.7), move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

/// Random spanning path plus roughly `0.5n` to `n` extra edges, some of
/// them parallel or self-loops.
fn generate_sparse(rng: &mut SmallRng) -> InputGraph {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = spanning_path(node_count, rng, &mut |r: &mut SmallRng| r.gen_range(0.1..100.0));

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        edges.push(WeightedEdge::new(i, j, rng.gen_range(0.1..100.0)));
    }

    InputGraph::new(node_count, edges)
}

/// Two to five components with no edges between them.
fn generate_disconnected(rng: &mut SmallRng) -> InputGraph {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let node_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let mut perm: Vec<usize> = (offset..offset + size).collect();
        shuffle(&mut perm, rng);
        for pair in perm.windows(2) {
            edges.push(WeightedEdge::new(pair[0], pair[1], rng.gen_range(0.1..100.0)));
        }
        let edge_probability: f64 = rng.gen_range(0.1..=0.5);
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(edge_probability) {
                    edges.push(WeightedEdge::new(i, j, rng.gen_range(0.1..100.0)));
                }
            }
        }
        offset += size;
    }

    InputGraph::new(node_count, edges)
}

/// Connects every node along a random permutation.
fn spanning_path(
    node_count: usize,
    rng: &mut SmallRng,
    weight: &mut impl FnMut(&mut SmallRng) -> f64,
) -> Vec<WeightedEdge> {
    let mut perm: Vec<usize> = (0..node_count).collect();
    shuffle(&mut perm, rng);
    perm.windows(2)
        .map(|pair| {
            let w = weight(rng);
            WeightedEdge::new(pair[0], pair[1], w)
        })
        .collect()
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
