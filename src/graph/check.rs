//! Expensive structural checks, run only when explicitly requested.

use crate::error::{KatzError, Result};
use crate::graph::Weight;

/// Rejects any ordered pair `(u, v)` that occurs more than once.
pub(crate) fn no_duplicate_edges(src: &[usize], dst: &[usize]) -> Result<()> {
    let mut pairs: Vec<(usize, usize)> = src.iter().copied().zip(dst.iter().copied()).collect();
    pairs.sort_unstable();
    match pairs.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(KatzError::InvalidGraphInput(format!(
            "duplicate edge {} -> {} in a graph not declared as a multigraph",
            w[0].0, w[0].1
        ))),
        None => Ok(()),
    }
}

/// Requires every edge `u -> v` to have a reverse `v -> u` of equal weight.
///
/// Self-loops are their own reverse.
pub(crate) fn symmetric<W: Weight>(src: &[usize], dst: &[usize], weights: &[W]) -> Result<()> {
    let mut edges: Vec<(usize, usize, W)> = src
        .iter()
        .zip(dst)
        .zip(weights)
        .map(|((&u, &v), &w)| (u, v, w))
        .collect();
    edges.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    for &(u, v, w) in &edges {
        if u == v {
            continue;
        }
        let lo = edges.partition_point(|e| (e.0, e.1) < (v, u));
        let reversed = edges[lo..]
            .iter()
            .take_while(|e| (e.0, e.1) == (v, u))
            .any(|e| e.2 == w);
        if !reversed {
            return Err(KatzError::InvalidGraphInput(format!(
                "graph declared symmetric but edge {u} -> {v} (weight {w}) has no matching reverse"
            )));
        }
    }
    Ok(())
}
