//! Error types for the Borůvka core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while validating input graphs or contracting them.
///
/// Lock contention and stale queue entries are routine parts of the
/// contraction protocol and never surface here. `InvariantViolation` marks a
/// logic error: the run that produced it is aborted and its partial state
/// must not be trusted.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BoruvkaError {
    /// The caller supplied a graph without nodes.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({source_node}, {target_node}) has non-finite weight")]
    NonFiniteWeight {
        /// The source endpoint id (as provided).
        source_node: usize,
        /// The target endpoint id (as provided).
        target_node: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({source_node}, {target_node}) has negative weight {weight}")]
    NegativeWeight {
        /// The source endpoint id (as provided).
        source_node: usize,
        /// The target endpoint id (as provided).
        target_node: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// The graph has more than one connected component.
    #[error("graph is disconnected: found {components} connected components")]
    Disconnected {
        /// Number of connected components discovered.
        components: usize,
    },
    /// The engine was configured with zero workers.
    #[error("worker count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The rejected worker count.
        got: usize,
    },
    /// The worker thread pool could not be created.
    #[error("failed to build worker pool: {reason}")]
    ThreadPool {
        /// Message reported by the pool builder.
        reason: String,
    },
    /// A component lock became poisoned after a worker panicked.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("contraction invariant violated: {invariant} (component {component})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The component involved when the violation was detected.
        component: usize,
    },
    /// The run finished without any worker publishing a solution.
    #[error("contraction finished without publishing a solution")]
    NoSolution,
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// The caller supplied a graph without nodes.
        EmptyGraph => EmptyGraph => "BORUVKA_EMPTY_GRAPH",
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "BORUVKA_INVALID_NODE_ID",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "BORUVKA_NON_FINITE_WEIGHT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "BORUVKA_NEGATIVE_WEIGHT",
        /// The graph has more than one connected component.
        Disconnected => Disconnected { .. } => "BORUVKA_DISCONNECTED",
        /// The engine was configured with zero workers.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "BORUVKA_INVALID_WORKER_COUNT",
        /// The worker thread pool could not be created.
        ThreadPool => ThreadPool { .. } => "BORUVKA_THREAD_POOL",
        /// A component lock became poisoned.
        LockPoisoned => LockPoisoned { .. } => "BORUVKA_LOCK_POISONED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "BORUVKA_INVARIANT_VIOLATION",
        /// The run finished without publishing a solution.
        NoSolution => NoSolution => "BORUVKA_NO_SOLUTION",
    }
}

impl BoruvkaError {
    /// Returns `true` for errors that indicate a broken internal invariant
    /// rather than bad input or configuration.
    #[must_use]
    pub const fn is_logic_error(&self) -> bool {
        matches!(
            self,
            Self::InvariantViolation { .. } | Self::LockPoisoned { .. } | Self::NoSolution
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
