//! Borrowed edge-list input.

use crate::error::{KatzError, Result};
use crate::graph::{VertexId, Weight};

/// Parallel `src`/`dst`/`weight` arrays describing the edges `src[i] -> dst[i]`.
///
/// The arrays are borrowed only for the duration of [`Graph::from_edge_list`]; the
/// graph builds and owns its own storage.
///
/// [`Graph::from_edge_list`]: crate::graph::Graph::from_edge_list
#[derive(Debug, Clone, Copy)]
pub struct EdgeList<'a, W> {
    src: &'a [VertexId],
    dst: &'a [VertexId],
    weights: Option<&'a [W]>,
}

impl<'a, W: Weight> EdgeList<'a, W> {
    /// A weighted edge list.
    pub fn new(src: &'a [VertexId], dst: &'a [VertexId], weights: &'a [W]) -> Self {
        Self {
            src,
            dst,
            weights: Some(weights),
        }
    }

    /// An unweighted edge list; every edge has weight 1.
    pub fn unweighted(src: &'a [VertexId], dst: &'a [VertexId]) -> Self {
        Self {
            src,
            dst,
            weights: None,
        }
    }

    /// Source IDs.
    #[inline]
    pub fn src(&self) -> &'a [VertexId] {
        self.src
    }

    /// Destination IDs.
    #[inline]
    pub fn dst(&self) -> &'a [VertexId] {
        self.dst
    }

    /// Edge weights, if supplied.
    #[inline]
    pub fn weights(&self) -> Option<&'a [W]> {
        self.weights
    }

    /// Number of edges described by `src`.
    #[inline]
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Whether there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Checks array lengths against each other and `num_edges`, and that weights
    /// are finite.
    pub(crate) fn validate(&self, num_edges: usize) -> Result<()> {
        if self.src.len() != self.dst.len() {
            return Err(KatzError::InvalidGraphInput(format!(
                "src has {} entries, dst has {}",
                self.src.len(),
                self.dst.len()
            )));
        }
        if let Some(w) = self.weights {
            if w.len() != self.src.len() {
                return Err(KatzError::InvalidGraphInput(format!(
                    "weight has {} entries, src/dst have {}",
                    w.len(),
                    self.src.len()
                )));
            }
            if let Some(i) = w.iter().position(|x| !x.is_finite()) {
                return Err(KatzError::InvalidGraphInput(format!(
                    "weight[{i}] = {} is not finite",
                    w[i]
                )));
            }
        }
        if self.src.len() != num_edges {
            return Err(KatzError::InvalidGraphInput(format!(
                "num_edges is {num_edges} but the arrays hold {} edges",
                self.src.len()
            )));
        }
        Ok(())
    }

    /// Weights as an owned vector, substituting 1 for unweighted input.
    pub(crate) fn weights_or_unit(&self) -> Vec<W> {
        match self.weights {
            Some(w) => w.to_vec(),
            None => vec![W::one(); self.src.len()],
        }
    }
}
