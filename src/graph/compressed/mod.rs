//! Compressed sparse adjacency with per-edge weights.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (major-vertex offsets)
//! - `indices`: `Vec<usize>` of length `m`, the vertex on the far end of each edge
//! - `weights`: `Vec<W>` of length `m`, parallel to `indices`
//! - `cross_degrees`: `Vec<usize>` of length `n`, degrees in the opposite direction
//!
//! For [`Orientation::Incoming`] the major vertex is the edge target, so the slice
//! `offsets[v]..offsets[v + 1]` lists the sources of edges into `v`.

use std::collections::TryReserveError;

use crate::graph::Orientation;

/// Immutable compressed sparse storage of a weighted directed graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `build` | \(O(n + m)\) | Counting sort, stable in edge order |
/// | `neighbors` | \(O(1)\) | Iterator over `(vertex, weight)` pairs |
/// | `degree` / `cross_degree` | \(O(1)\) | Precomputed |
/// | `contains` | \(O(1)\) | Range check |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of the major row |
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedAdjacency<W> {
    offsets: Vec<usize>,
    indices: Vec<usize>,
    weights: Vec<W>,
    cross_degrees: Vec<usize>,
    orientation: Orientation,
}

impl<W: Copy> CompressedAdjacency<W> {
    /// Builds storage grouping edge `k` under `major[k]` with far end `minor[k]`.
    ///
    /// Within a major vertex, edges keep their input order.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length, an endpoint is `>= n`, or the
    /// per-vertex arrays cannot be allocated; callers validate input before
    /// building.
    pub fn build(
        n: usize,
        major: &[usize],
        minor: &[usize],
        weights: &[W],
        orientation: Orientation,
    ) -> Self {
        match Self::try_build(n, major, minor, weights, orientation) {
            Ok(adjacency) => adjacency,
            Err(e) => panic!("cannot allocate storage for {n} vertices: {e}"),
        }
    }

    /// Like [`build`](Self::build), but reports a failed allocation of the
    /// per-vertex arrays instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns the allocator error when `n` vertices do not fit in memory.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length or an endpoint is `>= n`.
    pub fn try_build(
        n: usize,
        major: &[usize],
        minor: &[usize],
        weights: &[W],
        orientation: Orientation,
    ) -> Result<Self, TryReserveError> {
        assert_eq!(major.len(), minor.len(), "endpoint slices differ in length");
        assert_eq!(major.len(), weights.len(), "weight slice differs in length");
        let m = major.len();

        // Count edges per major vertex, and per minor vertex for the cross degrees.
        let mut degrees = zeroed(n)?;
        let mut cross_degrees = zeroed(n)?;
        for (&u, &v) in major.iter().zip(minor) {
            assert!(u < n && v < n, "edge {u}-{v} is out of bounds for n={n}");
            degrees[u] += 1;
            cross_degrees[v] += 1;
        }

        // Prefix sums of degrees.
        let mut offsets: Vec<usize> = Vec::new();
        offsets.try_reserve_exact(n.saturating_add(1))?;
        offsets.push(0);
        let mut total = 0usize;
        for &deg in &degrees {
            total += deg;
            offsets.push(total);
        }

        // Slot -> input edge (stable: by increasing input order).
        let mut write_pos = degrees;
        write_pos.copy_from_slice(&offsets[..n]);
        let mut order = vec![0usize; m];
        for (k, &u) in major.iter().enumerate() {
            order[write_pos[u]] = k;
            write_pos[u] += 1;
        }
        let indices = order.iter().map(|&k| minor[k]).collect();
        let weights = order.iter().map(|&k| weights[k]).collect();

        Ok(Self {
            offsets,
            indices,
            weights,
            cross_degrees,
            orientation,
        })
    }

    /// `(far vertex, weight)` pairs of major vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[inline]
    pub fn neighbors(&self, v: usize) -> impl ExactSizeIterator<Item = (usize, W)> + '_ {
        let (idx, w) = self.row(v);
        idx.iter().copied().zip(w.iter().copied())
    }
}

impl<W> CompressedAdjacency<W> {
    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.indices.len()
    }

    /// Storage orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether `v` is a valid vertex index.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    /// Degree along the stored direction (in-degree for `Incoming`).
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        assert!(self.contains(v), "vertex {v} out of bounds");
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Degree along the opposite direction (out-degree for `Incoming`).
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[inline]
    pub fn cross_degree(&self, v: usize) -> usize {
        self.cross_degrees[v]
    }

    /// Far-end vertices and weights of major vertex `v` as parallel slices.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of bounds.
    #[inline]
    pub fn row(&self, v: usize) -> (&[usize], &[W]) {
        assert!(self.contains(v), "vertex {v} out of bounds");
        let range = self.offsets[v]..self.offsets[v + 1];
        (&self.indices[range.clone()], &self.weights[range])
    }

    /// Whether an edge joins major vertex `major` and far vertex `minor`.
    ///
    /// For `Incoming` storage this asks whether `minor -> major` exists.
    pub fn has_edge(&self, major: usize, minor: usize) -> bool {
        self.row(major).0.contains(&minor)
    }

    /// The raw `(offsets, indices, weights)` arrays.
    pub fn parts(&self) -> (&[usize], &[usize], &[W]) {
        (&self.offsets, &self.indices, &self.weights)
    }
}

fn zeroed(len: usize) -> Result<Vec<usize>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0);
    Ok(v)
}

#[cfg(test)]
mod tests;
