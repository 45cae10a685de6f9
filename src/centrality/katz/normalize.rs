//! Final rescaling of a centrality vector.

use crate::centrality::katz::Normalization;
use crate::graph::Weight;

/// Rescales `scores` in place according to `mode`.
///
/// A vector whose norm is zero is left unchanged. Applying the same mode twice
/// is a no-op up to rounding.
pub fn normalize<W: Weight>(scores: &mut [W], mode: Normalization) {
    let norm = match mode {
        Normalization::None => return,
        Normalization::UnitL2 => l2_norm(scores),
        Normalization::Max => max_abs(scores),
    };
    trace!(norm = %norm, ?mode, "normalizing centralities");
    if norm > W::zero() && norm.is_finite() {
        for s in scores.iter_mut() {
            *s = *s / norm;
        }
    }
}

fn max_abs<W: Weight>(scores: &[W]) -> W {
    scores.iter().fold(W::zero(), |m, &x| m.max(x.abs()))
}

/// Euclidean norm scaled by the largest magnitude, so squares cannot overflow.
fn l2_norm<W: Weight>(scores: &[W]) -> W {
    let scale = max_abs(scores);
    if scale == W::zero() || !scale.is_finite() {
        return scale;
    }
    let sum: W = scores
        .iter()
        .map(|&x| {
            let y = x / scale;
            y * y
        })
        .sum();
    scale * sum.sqrt()
}
