//! Katz output.

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// How the iterate loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceStatus {
    /// The L1 change dropped below `n * epsilon`.
    Converged,
    /// The iteration budget ran out first; scores are the best available.
    MaxIterationsExceeded,
}

/// Centrality scores paired with the caller's vertex IDs.
///
/// Entries follow the internal vertex order; do not assume they are sorted by ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KatzResult<W> {
    vertices: Vec<VertexId>,
    centralities: Vec<W>,
    iterations: usize,
    error: W,
    status: ConvergenceStatus,
}

impl<W: Copy> KatzResult<W> {
    pub(crate) fn new(
        vertices: Vec<VertexId>,
        centralities: Vec<W>,
        iterations: usize,
        error: W,
        status: ConvergenceStatus,
    ) -> Self {
        debug_assert_eq!(vertices.len(), centralities.len());
        Self {
            vertices,
            centralities,
            iterations,
            error,
            status,
        }
    }

    /// External vertex IDs.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Scores, parallel to [`vertices`](Self::vertices).
    pub fn centralities(&self) -> &[W] {
        &self.centralities
    }

    /// Iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// L1 change of the last iteration.
    pub fn error(&self) -> W {
        self.error
    }

    /// Termination status.
    pub fn status(&self) -> ConvergenceStatus {
        self.status
    }

    /// Whether the loop converged.
    pub fn converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }

    /// Number of vertices scored.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `(vertex, centrality)` pairs in internal order.
    pub fn pairs(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.vertices.iter().copied().zip(self.centralities.iter().copied())
    }

    /// Score of the vertex with external ID `id`. \(O(n)\).
    pub fn get(&self, id: VertexId) -> Option<W> {
        self.vertices
            .iter()
            .position(|&v| v == id)
            .map(|i| self.centralities[i])
    }

    /// The two output arrays.
    pub fn into_parts(self) -> (Vec<VertexId>, Vec<W>) {
        (self.vertices, self.centralities)
    }
}
