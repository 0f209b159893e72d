//! Graph file parsers for the CLI.
//!
//! Two line-oriented formats are understood: the DIMACS shortest-path
//! format used by road-network benchmarks and a plain whitespace-separated
//! edge list.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use boruvka_core::{InputGraph, WeightedEdge};
use clap::ValueEnum;
use thiserror::Error;
use tracing::{Span, debug, field, instrument, warn};

/// Upper bound on the edge capacity reserved from a DIMACS arc count.
const MAX_RESERVED_ARCS: usize = 1 << 20;

/// Supported graph file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// DIMACS shortest-path format: `p sp <n> <m>` then `a <u> <v> <w>`
    /// lines with 1-based node ids.
    Dimacs,
    /// One `<u> <v> <w>` edge per line with 0-based node ids.
    EdgeList,
}

impl GraphFormat {
    /// Returns the label used in logs and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dimacs => "dimacs",
            Self::EdgeList => "edge-list",
        }
    }
}

/// Errors raised while reading a graph file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from an opened file failed.
    #[error("failed to read graph data: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line did not match the expected format.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// A DIMACS file ended without a `p sp` problem line.
    #[error("missing `p sp <nodes> <arcs>` problem line")]
    MissingProblemLine,
}

/// Opens `path` and parses it as `format`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read or is malformed.
#[instrument(
    name = "cli.load",
    err,
    skip(path),
    fields(path = field::Empty, format = format.label(), nodes = field::Empty, edges = field::Empty),
)]
pub fn load_graph(path: &Path, format: GraphFormat) -> Result<InputGraph, LoadError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let graph = match format {
        GraphFormat::Dimacs => parse_dimacs(reader)?,
        GraphFormat::EdgeList => parse_edge_list(reader)?,
    };
    span.record("nodes", graph.node_count());
    span.record("edges", graph.edges().len());
    Ok(graph)
}

/// Parses a DIMACS shortest-path graph.
///
/// Arcs are read as undirected edges; a file listing both directions of a
/// road yields parallel edges. Node ids are converted to 0-based.
///
/// # Errors
/// Returns [`LoadError::Parse`] for malformed lines, a repeated problem line,
/// or an arc before the problem line, and [`LoadError::MissingProblemLine`]
/// when no problem line is present.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::parse_dimacs;
///
/// let input = "c tiny\np sp 3 2\na 1 2 4\na 2 3 1\n";
/// let graph = parse_dimacs(input.as_bytes())?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges()[0].source(), 0);
/// # Ok::<(), boruvka_cli::cli::LoadError>(())
/// ```
pub fn parse_dimacs(reader: impl BufRead) -> Result<InputGraph, LoadError> {
    let mut problem: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoadError::Read { source })?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            None | Some("c") => {}
            Some("p") => {
                if problem.is_some() {
                    return Err(parse_error(line_no, "duplicate problem line"));
                }
                let kind = tokens.next();
                if kind != Some("sp") {
                    return Err(parse_error(
                        line_no,
                        format!("expected problem type `sp`, found `{}`", kind.unwrap_or("")),
                    ));
                }
                let nodes = parse_field::<usize>(tokens.next(), line_no, "node count")?;
                let arcs = parse_field::<usize>(tokens.next(), line_no, "arc count")?;
                expect_end(tokens.next(), line_no)?;
                edges.reserve(arcs.min(MAX_RESERVED_ARCS));
                problem = Some((nodes, arcs));
            }
            Some("a") => {
                if problem.is_none() {
                    return Err(parse_error(line_no, "arc before problem line"));
                }
                let source = one_based(tokens.next(), line_no, "arc tail")?;
                let target = one_based(tokens.next(), line_no, "arc head")?;
                let weight = parse_field::<f64>(tokens.next(), line_no, "arc weight")?;
                expect_end(tokens.next(), line_no)?;
                edges.push(WeightedEdge::new(source, target, weight));
            }
            Some(other) if other.starts_with('c') => {}
            Some(other) => {
                return Err(parse_error(
                    line_no,
                    format!("unknown line designator `{other}`"),
                ));
            }
        }
    }

    let (nodes, arcs) = problem.ok_or(LoadError::MissingProblemLine)?;
    if arcs != edges.len() {
        warn!(
            declared = arcs,
            found = edges.len(),
            "arc count differs from problem line"
        );
    }
    debug!(nodes, edges = edges.len(), "parsed DIMACS graph");
    Ok(InputGraph::new(nodes, edges))
}

/// Parses a whitespace-separated edge list with 0-based ids.
///
/// Blank lines and lines starting with `#` are skipped. The node count is
/// one more than the largest id seen.
///
/// # Errors
/// Returns [`LoadError::Parse`] for malformed lines.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::parse_edge_list;
///
/// let graph = parse_edge_list("# demo\n0 1 2.5\n1 2 1\n".as_bytes())?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), boruvka_cli::cli::LoadError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<InputGraph, LoadError> {
    let mut edges = Vec::new();
    let mut node_count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| LoadError::Read { source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        let source = parse_field::<usize>(tokens.next(), line_no, "source node")?;
        let target = parse_field::<usize>(tokens.next(), line_no, "target node")?;
        let weight = parse_field::<f64>(tokens.next(), line_no, "weight")?;
        expect_end(tokens.next(), line_no)?;
        let span = source
            .max(target)
            .checked_add(1)
            .ok_or_else(|| parse_error(line_no, "node id too large"))?;
        node_count = node_count.max(span);
        edges.push(WeightedEdge::new(source, target, weight));
    }

    debug!(nodes = node_count, edges = edges.len(), "parsed edge list");
    Ok(InputGraph::new(node_count, edges))
}

fn parse_field<T: std::str::FromStr>(
    token: Option<&str>,
    line: usize,
    what: &str,
) -> Result<T, LoadError> {
    let raw = token.ok_or_else(|| parse_error(line, format!("missing {what}")))?;
    raw.parse()
        .map_err(|_| parse_error(line, format!("invalid {what} `{raw}`")))
}

fn one_based(token: Option<&str>, line: usize, what: &str) -> Result<usize, LoadError> {
    let id = parse_field::<usize>(token, line, what)?;
    id.checked_sub(1)
        .ok_or_else(|| parse_error(line, format!("{what} must be at least 1")))
}

fn expect_end(token: Option<&str>, line: usize) -> Result<(), LoadError> {
    match token {
        None => Ok(()),
        Some(extra) => Err(parse_error(line, format!("unexpected trailing token `{extra}`"))),
    }
}

fn parse_error(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::Parse {
        line,
        reason: reason.into(),
    }
}
