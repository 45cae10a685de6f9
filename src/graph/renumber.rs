//! Dense relabelling of external vertex IDs.

use std::collections::HashMap;

use crate::graph::VertexId;

/// Bijection between external IDs and dense internal indices `0..n`.
///
/// Internal indices are assigned in order of first appearance while scanning the
/// edges, `src[i]` before `dst[i]`.
#[derive(Debug, Clone, Default)]
pub struct RenumberMap {
    labels: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
}

impl RenumberMap {
    /// Builds the map and returns the edge endpoints rewritten as dense indices.
    pub fn from_edges(src: &[VertexId], dst: &[VertexId]) -> (Self, Vec<usize>, Vec<usize>) {
        let mut map = Self {
            labels: Vec::new(),
            index: HashMap::with_capacity(src.len()),
        };
        let mut dense_src = Vec::with_capacity(src.len());
        let mut dense_dst = Vec::with_capacity(dst.len());
        for (&u, &v) in src.iter().zip(dst) {
            dense_src.push(map.intern(u));
            dense_dst.push(map.intern(v));
        }
        (map, dense_src, dense_dst)
    }

    fn intern(&mut self, id: VertexId) -> usize {
        let next = self.labels.len();
        *self.index.entry(id).or_insert_with(|| {
            self.labels.push(id);
            next
        })
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no vertex was seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Internal index of `id`, if present.
    #[inline]
    pub fn internal(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// External ID of internal index `v`.
    #[inline]
    pub fn external(&self, v: usize) -> VertexId {
        self.labels[v]
    }

    /// External IDs in internal order.
    #[inline]
    pub fn labels(&self) -> &[VertexId] {
        &self.labels
    }
}
