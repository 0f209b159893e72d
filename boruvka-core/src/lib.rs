//! Borůvka core library.
//!
//! Computes minimum spanning trees by concurrent, lock-based contraction of
//! graph components. Start with [`BoruvkaBuilder`]; the lower-level
//! [`contract`] and [`contract_sequential`] engines are public for callers
//! that bring their own [`Contraction`] components or [`SolutionSink`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arena;
mod boruvka;
mod builder;
mod component;
mod engine;
mod error;
mod graph;
mod queue;
mod sink;
#[cfg(test)]
mod test_utils;

pub use crate::{
    arena::{ComponentArena, ComponentSlot, SlotGuard, Tombstone},
    boruvka::Boruvka,
    builder::{BoruvkaBuilder, ExecutionStrategy},
    component::{Contraction, Supernode},
    engine::{
        ContractionReport, EngineConfig, WorkerStats, contract, contract_sequential,
    },
    error::{BoruvkaError, BoruvkaErrorCode, Result},
    graph::{ComponentId, Edge, EdgeId, InputGraph, WeightedEdge},
    queue::WorkQueue,
    sink::{MinimumSpanningTree, SolutionSink, SpanningTreeSink},
};
