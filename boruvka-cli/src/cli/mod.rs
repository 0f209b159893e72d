//! Command-line interface orchestration for the Borůvka engine.
//!
//! The CLI offers a `run` command that loads a DIMACS or edge-list graph
//! file, computes its minimum spanning tree and prints a summary.

mod commands;
mod loader;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, Strategy, render_summary, run_cli,
};
pub use loader::{GraphFormat, LoadError, load_graph, parse_dimacs, parse_edge_list};

#[cfg(test)]
mod test_helpers;
