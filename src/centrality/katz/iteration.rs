//! One Katz power-iteration pass.
//!
//! ```text
//! x_{t+1}[i] = beta[i] + alpha * Σ_{j → i} w(j, i) * x_t[j]
//! ```
//!
//! Every vertex reads only `x_t` and writes only its own slot of `x_{t+1}`, so the
//! pass needs no synchronization beyond the fork/join of the parallel iterator.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::{CompressedAdjacency, Weight};

/// Vertices per parallel task; smaller graphs are not worth splitting further.
#[cfg(feature = "parallel")]
const MIN_VERTICES_PER_TASK: usize = 512;

/// Weighted sum of the previous scores of `v`'s predecessors.
#[inline]
fn gather<W: Weight>(incoming: &CompressedAdjacency<W>, prev: &[W], v: usize) -> W {
    let (sources, weights) = incoming.row(v);
    sources
        .iter()
        .zip(weights)
        .fold(W::zero(), |acc, (&u, &w)| acc + w * prev[u])
}

/// Computes `next` from `prev` over incoming storage.
///
/// `beta_at(v)` supplies the base term of vertex `v`. `prev` is left untouched.
///
/// # Panics
///
/// Panics if `prev` or `next` do not have one slot per vertex.
pub fn katz_pass<W, B>(
    incoming: &CompressedAdjacency<W>,
    prev: &[W],
    next: &mut [W],
    alpha: W,
    beta_at: B,
    parallel: bool,
) where
    W: Weight,
    B: Fn(usize) -> W + Sync,
{
    let n = incoming.vertex_count();
    assert_eq!(prev.len(), n, "previous vector has wrong length");
    assert_eq!(next.len(), n, "next vector has wrong length");

    let update = |(v, slot): (usize, &mut W)| {
        *slot = beta_at(v) + alpha * gather(incoming, prev, v);
    };

    #[cfg(feature = "parallel")]
    if parallel {
        next.par_iter_mut()
            .with_min_len(MIN_VERTICES_PER_TASK)
            .enumerate()
            .for_each(update);
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    next.iter_mut().enumerate().for_each(update);
}
