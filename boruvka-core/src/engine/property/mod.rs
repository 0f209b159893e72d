//! Property-based tests for the contraction engines.
//!
//! Verifies the concurrent engine against a sequential Kruskal oracle,
//! validates structural invariants of the published tree (acyclicity,
//! spanning, edge count), and checks that repeated concurrent runs agree
//! across graph topologies with varied weight distributions.

mod concurrency;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
