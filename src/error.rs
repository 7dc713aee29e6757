//! Errors reported by fallible graph operations.
//!
//! Most queries in this crate express absence through `Option` (a missing node, an
//! unreachable destination, an unknown edge weight). `GraphError` is reserved for
//! requests that cannot be fulfilled for the given input at all.

use thiserror::Error;

/// Error type of this crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A topological order was requested for a graph that contains a directed cycle.
    #[error("graph contains a cycle: {remaining} node(s) could not be ordered")]
    CycleDetected {
        /// Number of nodes left over once no node of in-degree zero remained
        remaining: usize,
    },

    /// A random generator was configured with a value outside of `[0, 1]`.
    #[error("invalid probability {0}: must lie within [0, 1]")]
    InvalidProbability(f64),
}

/// Shorthand for results carrying a [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;
