//! # `katz_centrality` - Parallel Katz Centrality Engine
//!
//! A compute core for Katz centrality over static, directed, weighted graphs.
//! Graphs are ingested from raw edge arrays into compressed sparse storage and the
//! centrality vector is refined by a double-buffered power iteration until the
//! per-vertex change drops below a caller-supplied tolerance.
//!
//! ## Architecture
//!
//! 1. **Graph Representation** ([`graph`]):
//!    - Immutable compressed sparse storage, built in \(O(n + m)\) by counting sort
//!    - Transposed (incoming) or direct (outgoing) orientation
//!    - Optional dense renumbering of arbitrary external vertex IDs
//!
//! 2. **Iteration Engine** ([`centrality::katz::iteration`]):
//!    - \(x_{t+1}[i] = \beta_i + \alpha \sum_{j \to i} w(j, i)\, x_t[j]\)
//!    - Data-parallel across vertices; each vertex writes only its own slot
//!
//! 3. **Convergence Monitor** ([`centrality::katz::convergence`]):
//!    - L1 norm of the difference between successive vectors
//!    - Converged when `err < n * epsilon`
//!
//! 4. **Centrality Driver** ([`centrality::katz::KatzDriver`]):
//!    - `Uninitialized → Initialized → Iterating → Converged | MaxIterationsExceeded → Finalized`
//!    - Renormalization and reversal of the internal renumbering
//!
//! ## Features
//!
//! - `parallel` (default): per-vertex passes and reductions run on `rayon`.
//! - `tracing` (default): structured events through the `tracing` facade.
//!
//! ## Example
//!
//! ```rust
//! use katz_centrality::{
//!     katz_centrality, ComputeContext, EdgeList, Graph, GraphBuildOptions, KatzConfig,
//!     Normalization,
//! };
//!
//! // 0 -> 1 -> 2
//! let src = [0, 1];
//! let dst = [1, 2];
//! let weights = [1.0_f64, 1.0];
//! let edges = EdgeList::new(&src, &dst, &weights);
//! let graph = Graph::from_edge_list(&edges, 3, 2, &GraphBuildOptions::transposed()).unwrap();
//!
//! let ctx = ComputeContext::sequential();
//! let config = KatzConfig::new(0.1, 1.0).with_normalization(Normalization::None);
//! let result = katz_centrality(&ctx, &graph, &config).unwrap();
//!
//! assert!(result.converged());
//! assert!((result.get(2).unwrap() - 1.11).abs() < 1e-6);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

pub mod centrality;
pub mod context;
pub mod error;
pub mod graph;

pub use centrality::katz::{
    convergent_alpha, katz_centrality, ConvergenceStatus, DriverState, KatzConfig, KatzDriver,
    KatzResult, Normalization, StepOutcome,
};
pub use context::{ComputeContext, ContextConfig};
pub use error::{KatzError, Result};
pub use graph::{
    EdgeList, Graph, GraphBuildOptions, GraphProperties, Orientation, VertexId, Weight,
};
