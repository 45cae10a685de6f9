//! Error taxonomy for graph construction and Katz computation.

/// Errors surfaced by graph construction and the Katz driver.
///
/// Construction and parameter errors are raised before any iteration runs.
/// `NumericalDivergence` aborts the loop at the first iteration whose scores are
/// no longer finite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KatzError {
    /// Malformed or inconsistent edge arrays or vertex count.
    #[error("invalid graph input: {0}")]
    InvalidGraphInput(String),
    /// A numeric parameter is out of its admissible range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The graph was not built with incoming-edge (transposed) storage.
    #[error("unsupported orientation: graph must be stored transposed for incoming-edge traversal")]
    UnsupportedOrientation,
    /// A non-finite value appeared while iterating.
    #[error("numerical divergence: non-finite centrality at iteration {iteration}")]
    NumericalDivergence {
        /// Iteration (1-based) that produced the non-finite value.
        iteration: usize,
    },
    /// The iteration budget ran out; only raised under strict convergence.
    #[error("did not converge within {iterations} iterations (last error {error})")]
    MaxIterationsExceeded {
        /// Iterations performed.
        iterations: usize,
        /// L1 error of the last iteration.
        error: f64,
    },
    /// The compute context could not acquire its thread pool.
    #[error("thread pool: {0}")]
    ThreadPool(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, KatzError>;
