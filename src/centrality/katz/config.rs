//! Katz parameters.

use serde::{Deserialize, Serialize};

use crate::error::{KatzError, Result};
use crate::graph::Weight;

/// Final scaling applied to the converged vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Raw fixed-point scores.
    None,
    /// Scale to unit Euclidean norm.
    #[default]
    UnitL2,
    /// Scale so the largest absolute score is 1.
    Max,
}

/// Configuration for Katz centrality.
///
/// Per-vertex vectors (`betas`, `initial_guess`) are indexed in internal vertex
/// order, the order of [`Graph::vertex_ids`](crate::graph::Graph::vertex_ids).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "W: Serialize", deserialize = "W: Weight + Deserialize<'de>")
)]
pub struct KatzConfig<W> {
    /// Damping factor. Must be below `1 / λ_max` for convergence.
    pub alpha: W,
    /// Uniform base term added to every vertex.
    pub beta: W,
    /// Per-vertex base terms; overrides `beta` when set.
    pub betas: Option<Vec<W>>,
    /// Seed for the first buffer; defaults to the base terms.
    pub initial_guess: Option<Vec<W>>,
    /// Per-vertex convergence tolerance.
    pub epsilon: W,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Final scaling.
    pub normalization: Normalization,
    /// Fail with [`KatzError::MaxIterationsExceeded`] instead of returning an
    /// unconverged result.
    pub strict_convergence: bool,
    /// Check that base terms and the initial guess are non-negative.
    pub do_expensive_check: bool,
}

impl<W: Weight> Default for KatzConfig<W> {
    fn default() -> Self {
        Self {
            alpha: lit(0.1),
            beta: W::one(),
            betas: None,
            initial_guess: None,
            epsilon: lit(1e-6),
            max_iterations: 100,
            normalization: Normalization::default(),
            strict_convergence: false,
            do_expensive_check: false,
        }
    }
}

impl<W: Weight> KatzConfig<W> {
    /// A configuration with the given damping and base factors.
    pub fn new(alpha: W, beta: W) -> Self {
        Self {
            alpha,
            beta,
            ..Self::default()
        }
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: W) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set per-vertex base terms.
    #[must_use]
    pub fn with_betas(mut self, betas: Vec<W>) -> Self {
        self.betas = Some(betas);
        self
    }

    /// Set the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: Vec<W>) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Set the final scaling.
    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Fail instead of returning an unconverged result.
    #[must_use]
    pub fn with_strict_convergence(mut self, strict: bool) -> Self {
        self.strict_convergence = strict;
        self
    }

    /// Enable the expensive input checks.
    #[must_use]
    pub fn with_expensive_check(mut self, enabled: bool) -> Self {
        self.do_expensive_check = enabled;
        self
    }

    /// Base term of internal vertex `v`.
    #[inline]
    pub(crate) fn beta_at(&self, v: usize) -> W {
        match &self.betas {
            Some(betas) => betas[v],
            None => self.beta,
        }
    }

    /// Checks every parameter against a graph of `n` vertices.
    pub(crate) fn validate(&self, n: usize) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < W::zero() {
            return Err(invalid(format!("alpha must be finite and >= 0, got {}", self.alpha)));
        }
        if !self.beta.is_finite() {
            return Err(invalid(format!("beta must be finite, got {}", self.beta)));
        }
        if !self.epsilon.is_finite() || self.epsilon <= W::zero() {
            return Err(invalid(format!("epsilon must be finite and > 0, got {}", self.epsilon)));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be > 0".into()));
        }
        if let Some(betas) = &self.betas {
            per_vertex("betas", betas, n)?;
        }
        if let Some(guess) = &self.initial_guess {
            per_vertex("initial_guess", guess, n)?;
        }

        if self.do_expensive_check {
            if self.beta < W::zero() {
                return Err(invalid(format!("beta must be non-negative, got {}", self.beta)));
            }
            if let Some(betas) = &self.betas {
                non_negative("betas", betas)?;
            }
            if let Some(guess) = &self.initial_guess {
                non_negative("initial_guess", guess)?;
            }
        }
        Ok(())
    }
}

fn per_vertex<W: Weight>(name: &str, values: &[W], n: usize) -> Result<()> {
    if values.len() != n {
        return Err(invalid(format!(
            "{name} has {} entries, graph has {n} vertices",
            values.len()
        )));
    }
    match values.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(invalid(format!("{name}[{i}] = {} is not finite", values[i]))),
        None => Ok(()),
    }
}

fn non_negative<W: Weight>(name: &str, values: &[W]) -> Result<()> {
    match values.iter().position(|&x| x < W::zero()) {
        Some(i) => Err(invalid(format!("{name}[{i}] = {} is negative", values[i]))),
        None => Ok(()),
    }
}

fn invalid(msg: String) -> KatzError {
    KatzError::InvalidParameter(msg)
}

fn lit<W: Weight>(x: f64) -> W {
    num_traits::cast(x).unwrap_or_else(W::nan)
}
