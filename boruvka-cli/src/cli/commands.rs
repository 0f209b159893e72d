//! Command implementations and argument parsing for the Borůvka CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use boruvka_core::{
    BoruvkaBuilder, BoruvkaError, ContractionReport, ExecutionStrategy, MinimumSpanningTree,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::loader::{GraphFormat, LoadError, load_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning trees by concurrent component contraction."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph file and compute its minimum spanning tree.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the graph file.
    pub path: PathBuf,

    /// Format of the graph file.
    #[arg(long, value_enum, default_value_t = GraphFormat::Dimacs)]
    pub format: GraphFormat,

    /// Number of worker threads (defaults to the available parallelism).
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Contraction engine to run.
    #[arg(long, value_enum, default_value_t = Strategy::Concurrent)]
    pub strategy: Strategy,

    /// Contract disconnected graphs instead of rejecting them; the result
    /// then covers a single component.
    #[arg(long)]
    pub skip_connectivity_check: bool,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Engine selection exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Lock-based contraction on a worker pool.
    Concurrent,
    /// Single-threaded reference contraction.
    Sequential,
}

impl From<Strategy> for ExecutionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Concurrent => Self::Concurrent,
            Strategy::Sequential => Self::Sequential,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be loaded.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Path of the graph file.
        path: PathBuf,
        /// Underlying loader failure.
        #[source]
        source: LoadError,
    },
    /// Core validation or contraction failed.
    #[error(transparent)]
    Core(#[from] BoruvkaError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph, derived from the file name unless overridden.
    pub graph: String,
    /// Number of nodes in the input graph.
    pub nodes: usize,
    /// Number of edges in the input graph.
    pub edges: usize,
    /// The computed spanning tree.
    pub tree: MinimumSpanningTree,
    /// Engine counters for the run.
    pub report: ContractionReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or contraction fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, Command, GraphFormat, RunCommand, Strategy, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 1\n1 2 2\n2 3 1\n3 0 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         format: GraphFormat::EdgeList,
///         workers: Some(2),
///         strategy: Strategy::Concurrent,
///         skip_connectivity_check: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 4.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(format = field::Empty, strategy = field::Empty, workers = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        format,
        workers,
        strategy,
        skip_connectivity_check,
        name,
    } = command;

    let mut builder = BoruvkaBuilder::new()
        .with_execution_strategy(strategy.into())
        .with_connectivity_check(!skip_connectivity_check);
    if let Some(workers) = workers {
        builder = builder.with_workers(workers);
    }
    let boruvka = builder.build()?;

    let span = Span::current();
    span.record("format", field::display(format.label()));
    span.record("strategy", field::debug(boruvka.execution_strategy()));
    span.record("workers", boruvka.workers().get());

    let graph = load_graph(&path, format).map_err(|source| CliError::Load {
        path: path.clone(),
        source,
    })?;
    let (tree, report) = boruvka.run_with_report(&graph)?;

    let summary = ExecutionSummary {
        graph: derive_graph_name(&path, name.as_deref()),
        nodes: graph.node_count(),
        edges: graph.edges().len(),
        tree,
        report,
    };
    info!(
        graph = summary.graph.as_str(),
        total_weight = summary.tree.total_weight(),
        tree_edges = summary.tree.total_edge_count(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// A header block is followed by one tab-separated `source target weight`
/// line per tree edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = summary.report.stats();
    writeln!(writer, "graph: {}", summary.graph)?;
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "total weight: {}", summary.tree.total_weight())?;
    writeln!(writer, "tree edges: {}", summary.tree.total_edge_count())?;
    writeln!(
        writer,
        "workers: {} (merges {}, requeues {})",
        summary.report.workers(),
        stats.merges,
        stats.contention_requeues
    )?;
    for edge in summary.tree.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}
