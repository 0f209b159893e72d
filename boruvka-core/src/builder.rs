//! Builder utilities for configuring Borůvka runs.
//!
//! Exposes the execution strategy selection surface and the validation
//! performed before a [`Boruvka`] instance is constructed.

use crate::{Result, boruvka::Boruvka, engine::EngineConfig};

/// Selects the engine [`Boruvka::run`] drives.
///
/// # Examples
/// ```
/// use boruvka_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Concurrent);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Lock-based contraction on a pool of worker threads.
    #[default]
    Concurrent,
    /// Single-threaded contraction without locks.
    Sequential,
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_workers(4)
///     .with_execution_strategy(ExecutionStrategy::Concurrent)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.workers().get(), 4);
/// assert_eq!(boruvka.execution_strategy(), ExecutionStrategy::Concurrent);
/// ```
#[derive(Debug, Clone)]
pub struct BoruvkaBuilder {
    workers: Option<usize>,
    execution_strategy: ExecutionStrategy,
    connectivity_check: bool,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            workers: None,
            execution_strategy: ExecutionStrategy::Concurrent,
            connectivity_check: true,
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.workers(), None);
    /// assert!(builder.connectivity_check());
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Concurrent);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the worker count. Without an override one worker runs per
    /// available hardware thread.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Returns the explicitly configured worker count, if any.
    #[must_use]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Sets the execution strategy to use when running.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
    ///
    /// let builder = BoruvkaBuilder::new().with_execution_strategy(ExecutionStrategy::Sequential);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Enables or disables the connectivity check performed before
    /// contraction.
    ///
    /// With the check disabled a disconnected graph yields the tree of
    /// whichever component finishes first.
    #[must_use]
    pub fn with_connectivity_check(mut self, enabled: bool) -> Self {
        self.connectivity_check = enabled;
        self
    }

    /// Returns whether the connectivity check is enabled.
    #[must_use]
    pub fn connectivity_check(&self) -> bool {
        self.connectivity_check
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BoruvkaError::InvalidWorkerCount`] when zero workers
    /// were requested.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, BoruvkaErrorCode};
    ///
    /// let err = BoruvkaBuilder::new().with_workers(0).build().unwrap_err();
    /// assert_eq!(err.code(), BoruvkaErrorCode::InvalidWorkerCount);
    /// ```
    pub fn build(self) -> Result<Boruvka> {
        let config = match self.workers {
            Some(workers) => EngineConfig::new(workers)?,
            None => EngineConfig::default(),
        };
        Ok(Boruvka::new(
            config,
            self.execution_strategy,
            self.connectivity_check,
        ))
    }
}
