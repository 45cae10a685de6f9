//! Convergence monitoring between successive centrality vectors.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::Weight;

#[cfg(feature = "parallel")]
const MIN_VERTICES_PER_TASK: usize = 1024;

/// L1 norm of `next - prev`.
///
/// With `parallel` set the sum is a `rayon` tree reduction, so the rounding may
/// differ from the sequential sum in the last bits.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn l1_error<W: Weight>(prev: &[W], next: &[W], parallel: bool) -> W {
    assert_eq!(prev.len(), next.len(), "vectors differ in length");

    #[cfg(feature = "parallel")]
    if parallel {
        return prev
            .par_iter()
            .with_min_len(MIN_VERTICES_PER_TASK)
            .zip(next.par_iter())
            .map(|(&a, &b)| (b - a).abs())
            .sum();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    prev.iter().zip(next).map(|(&a, &b)| (b - a).abs()).sum()
}

/// Whether an iteration with L1 change `error` over `n` vertices has converged.
///
/// An empty graph is trivially converged; a non-finite `error` never converges.
pub fn has_converged<W: Weight>(error: W, n: usize, epsilon: W) -> bool {
    if n == 0 {
        return true;
    }
    match num_traits::cast::<usize, W>(n) {
        Some(n) => error < n * epsilon,
        None => false,
    }
}
