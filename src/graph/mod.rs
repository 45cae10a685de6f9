//! Immutable weighted graph storage for centrality computations.
//!
//! A [`Graph`] is built once from an [`EdgeList`] and never mutated afterwards.
//! Storage is compressed sparse:
//! - [`Orientation::Incoming`] (transposed, CSC-like): each vertex's *incoming*
//!   `(source, weight)` pairs are contiguous. Required by Katz.
//! - [`Orientation::Outgoing`] (CSR-like): each vertex's *outgoing* pairs are
//!   contiguous.
//!
//! Both orientations answer `in_degree`/`out_degree` in \(O(1)\).

use core::fmt::{Debug, Display};
use core::iter::Sum;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{KatzError, Result};

mod check;
pub mod compressed;
mod edge_list;
mod renumber;

pub use compressed::CompressedAdjacency;
pub use edge_list::EdgeList;
pub use renumber::RenumberMap;

/// External vertex identifier as supplied by the caller.
pub type VertexId = i32;

/// Floating-point type usable for edge weights and centrality scores.
///
/// Implemented for `f32` and `f64`.
pub trait Weight: Float + Sum + Default + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: Float + Sum + Default + Debug + Display + Send + Sync + 'static {}

/// Direction in which adjacency is stored contiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Row-major: outgoing edges of a vertex are contiguous.
    Outgoing,
    /// Column-major (transposed): incoming edges of a vertex are contiguous.
    Incoming,
}

/// Structural properties declared by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphProperties {
    /// Every edge `u -> v` has a reverse edge `v -> u` of equal weight.
    pub is_symmetric: bool,
    /// Parallel edges between the same ordered pair may occur.
    pub is_multigraph: bool,
}

/// Options controlling how a [`Graph`] is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphBuildOptions {
    /// Declared structural properties.
    pub properties: GraphProperties,
    /// Store the transpose so incoming edges are contiguous.
    pub store_transposed: bool,
    /// Relabel arbitrary external IDs to a dense `0..n` range.
    pub renumber: bool,
    /// Run the \(O(m \log m)\) duplicate-edge and symmetry checks.
    pub do_expensive_check: bool,
}

impl GraphBuildOptions {
    /// Options for transposed storage with everything else defaulted.
    pub fn transposed() -> Self {
        Self {
            store_transposed: true,
            ..Self::default()
        }
    }

    /// Sets the declared properties.
    #[must_use]
    pub fn with_properties(mut self, properties: GraphProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Enables or disables renumbering.
    #[must_use]
    pub fn with_renumber(mut self, renumber: bool) -> Self {
        self.renumber = renumber;
        self
    }

    /// Enables or disables the expensive construction checks.
    #[must_use]
    pub fn with_expensive_check(mut self, enabled: bool) -> Self {
        self.do_expensive_check = enabled;
        self
    }

    /// The orientation these options produce.
    pub fn orientation(&self) -> Orientation {
        if self.store_transposed {
            Orientation::Incoming
        } else {
            Orientation::Outgoing
        }
    }
}

/// An immutable, directed, weighted graph over dense internal vertices `0..n`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edge_list` | \(O(n + m)\) | Counting sort into offsets |
/// | `from_edge_list` (expensive check) | \(O(m \log m)\) | Duplicate and symmetry checks |
/// | `in_degree` / `out_degree` | \(O(1)\) | Either orientation |
/// | `contains_vertex` | \(O(1)\) | Hash lookup when renumbered |
/// | `incoming().neighbors(v)` | \(O(\text{in-degree})\) | Transposed storage only |
#[derive(Debug, Clone)]
pub struct Graph<W> {
    adjacency: CompressedAdjacency<W>,
    properties: GraphProperties,
    renumber: Option<RenumberMap>,
}

impl<W: Weight> Graph<W> {
    /// Builds a graph from raw edge arrays.
    ///
    /// # Errors
    ///
    /// Returns [`KatzError::InvalidGraphInput`] when array lengths disagree with each
    /// other or with `num_edges`, a weight is not finite, a vertex ID is out of range
    /// (or, when renumbering, the number of distinct IDs differs from
    /// `num_vertices`), an expensive check fails, or storage for `num_vertices`
    /// cannot be allocated.
    ///
    /// Without renumbering, memory is proportional to `num_vertices` even when
    /// most vertices are isolated.
    pub fn from_edge_list(
        edges: &EdgeList<'_, W>,
        num_vertices: usize,
        num_edges: usize,
        options: &GraphBuildOptions,
    ) -> Result<Self> {
        edges.validate(num_edges)?;

        let (renumber, src, dst) = if options.renumber {
            let (map, src, dst) = RenumberMap::from_edges(edges.src(), edges.dst());
            if map.len() != num_vertices {
                return Err(KatzError::InvalidGraphInput(format!(
                    "renumbering found {} distinct vertices, expected {num_vertices}",
                    map.len()
                )));
            }
            (Some(map), src, dst)
        } else {
            let src = dense_ids(edges.src(), num_vertices, "src")?;
            let dst = dense_ids(edges.dst(), num_vertices, "dst")?;
            (None, src, dst)
        };

        let weights = edges.weights_or_unit();

        if options.do_expensive_check {
            debug!(num_edges, "running expensive graph checks");
            if !options.properties.is_multigraph {
                check::no_duplicate_edges(&src, &dst)?;
            }
            if options.properties.is_symmetric {
                check::symmetric(&src, &dst, &weights)?;
            }
        }

        let orientation = options.orientation();
        let (major, minor) = match orientation {
            Orientation::Incoming => (&dst, &src),
            Orientation::Outgoing => (&src, &dst),
        };
        let adjacency =
            CompressedAdjacency::try_build(num_vertices, major, minor, &weights, orientation)
                .map_err(|e| {
                    KatzError::InvalidGraphInput(format!(
                        "cannot allocate storage for {num_vertices} vertices: {e}"
                    ))
                })?;

        debug!(
            vertices = num_vertices,
            edges = num_edges,
            ?orientation,
            renumbered = renumber.is_some(),
            "graph built"
        );

        Ok(Self {
            adjacency,
            properties: options.properties,
            renumber,
        })
    }
}

impl<W> Graph<W> {
    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Storage orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.adjacency.orientation()
    }

    /// Declared structural properties.
    #[inline]
    pub fn properties(&self) -> GraphProperties {
        self.properties
    }

    /// Whether external IDs were relabelled at construction.
    #[inline]
    pub fn is_renumbered(&self) -> bool {
        self.renumber.is_some()
    }

    /// The incoming-edge view required by algorithms that gather from predecessors.
    ///
    /// # Errors
    ///
    /// Returns [`KatzError::UnsupportedOrientation`] unless the graph was built with
    /// `store_transposed`.
    pub fn incoming(&self) -> Result<&CompressedAdjacency<W>> {
        match self.orientation() {
            Orientation::Incoming => Ok(&self.adjacency),
            Orientation::Outgoing => Err(KatzError::UnsupportedOrientation),
        }
    }

    /// Raw compressed storage in whatever orientation it was built.
    #[inline]
    pub fn adjacency(&self) -> &CompressedAdjacency<W> {
        &self.adjacency
    }

    /// In-degree of internal vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    pub fn in_degree(&self, v: usize) -> usize {
        match self.orientation() {
            Orientation::Incoming => self.adjacency.degree(v),
            Orientation::Outgoing => self.adjacency.cross_degree(v),
        }
    }

    /// Out-degree of internal vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    pub fn out_degree(&self, v: usize) -> usize {
        match self.orientation() {
            Orientation::Incoming => self.adjacency.cross_degree(v),
            Orientation::Outgoing => self.adjacency.degree(v),
        }
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.to_internal(id).is_some()
    }

    /// Maps an external ID to its dense internal index.
    pub fn to_internal(&self, id: VertexId) -> Option<usize> {
        match &self.renumber {
            Some(map) => map.internal(id),
            None => usize::try_from(id).ok().filter(|&v| v < self.vertex_count()),
        }
    }

    /// Maps a dense internal index back to the caller's external ID.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn external_id(&self, v: usize) -> VertexId {
        assert!(v < self.vertex_count(), "vertex {v} out of bounds");
        match &self.renumber {
            Some(map) => map.external(v),
            // Range checked at construction.
            None => v as VertexId,
        }
    }

    /// External IDs in internal vertex order.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        match &self.renumber {
            Some(map) => map.labels().to_vec(),
            None => (0..self.vertex_count()).map(|v| self.external_id(v)).collect(),
        }
    }
}

/// Converts caller IDs to dense indices, requiring `0 <= id < n`.
fn dense_ids(ids: &[VertexId], n: usize, which: &str) -> Result<Vec<usize>> {
    if n > 0 && VertexId::try_from(n - 1).is_err() {
        return Err(KatzError::InvalidGraphInput(format!(
            "num_vertices {n} exceeds the vertex ID range"
        )));
    }
    ids.iter()
        .enumerate()
        .map(|(i, &id)| match usize::try_from(id) {
            Ok(v) if v < n => Ok(v),
            _ => Err(KatzError::InvalidGraphInput(format!(
                "{which}[{i}] = {id} is out of range for {n} vertices"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests;
