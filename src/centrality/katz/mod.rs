//! Katz centrality: damped counting of weighted incoming walks.
//!
//! # Definition
//!
//! ```text
//! x_v = β_v + α × Σ_{u→v} w(u, v) × x_u
//! ```
//!
//! In matrix form \(x = \alpha A^T x + \beta\), solved by power iteration from a
//! seed of \(\beta\) (or a caller-supplied guess). The iteration contracts when
//! \(\alpha < 1 / \lambda_{max}\); [`convergent_alpha`] returns a safe choice.
//!
//! # Driver states
//!
//! ```text
//! Uninitialized → Initialized → Iterating → Converged ─────────────┐
//!                                         └→ MaxIterationsExceeded ─┴→ Finalized
//! ```
//!
//! Parameter and orientation errors are raised by [`KatzDriver::initialize`],
//! before any pass runs. Iterations are strictly sequential; only the per-vertex
//! work inside one pass is parallel.

use core::mem;

use crate::context::ComputeContext;
use crate::error::{KatzError, Result};
use crate::graph::{Graph, Orientation, Weight};

mod config;
pub mod convergence;
pub mod iteration;
pub mod normalize;
mod result;

pub use config::{KatzConfig, Normalization};
pub use result::{ConvergenceStatus, KatzResult};

/// Lifecycle of a [`KatzDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Constructed; nothing validated or allocated.
    Uninitialized,
    /// Parameters validated, buffers seeded.
    Initialized,
    /// At least one pass done, not yet converged.
    Iterating,
    /// The last pass met the tolerance.
    Converged,
    /// The budget ran out before the tolerance was met.
    MaxIterationsExceeded,
    /// Scores normalized and ready to read.
    Finalized,
}

/// Result of a single [`KatzDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome<W> {
    /// A pass ran and more are needed.
    Continue {
        /// Iterations completed so far.
        iteration: usize,
        /// L1 change of this pass.
        error: W,
    },
    /// The loop has terminated; no pass was run by this call unless it was the last.
    Finished(ConvergenceStatus),
}

/// Orchestrates one Katz computation over a borrowed graph.
///
/// The driver exclusively owns the two centrality buffers; they are only swapped
/// at iteration boundaries and never exposed mutably.
#[derive(Debug)]
pub struct KatzDriver<'a, W> {
    ctx: &'a ComputeContext,
    graph: &'a Graph<W>,
    config: &'a KatzConfig<W>,
    state: DriverState,
    current: Vec<W>,
    next: Vec<W>,
    iterations: usize,
    error: W,
    outcome: Option<ConvergenceStatus>,
}

impl<'a, W: Weight> KatzDriver<'a, W> {
    /// A driver in the `Uninitialized` state.
    pub fn new(ctx: &'a ComputeContext, graph: &'a Graph<W>, config: &'a KatzConfig<W>) -> Self {
        Self {
            ctx,
            graph,
            config,
            state: DriverState::Uninitialized,
            current: Vec::new(),
            next: Vec::new(),
            iterations: 0,
            error: W::infinity(),
            outcome: None,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Iterations completed.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// L1 change of the last pass (infinite before the first).
    #[inline]
    pub fn error(&self) -> W {
        self.error
    }

    /// The current centrality estimate, in internal vertex order.
    #[inline]
    pub fn centralities(&self) -> &[W] {
        &self.current
    }

    /// Validates the graph and parameters and seeds the buffers.
    ///
    /// Does nothing once the driver has left `Uninitialized`.
    ///
    /// # Errors
    ///
    /// - [`KatzError::UnsupportedOrientation`] if the graph is not transposed.
    /// - [`KatzError::InvalidGraphInput`] if the graph is declared a multigraph.
    /// - [`KatzError::InvalidParameter`] for out-of-range parameters.
    pub fn initialize(&mut self) -> Result<()> {
        if self.state != DriverState::Uninitialized {
            return Ok(());
        }
        if self.graph.orientation() != Orientation::Incoming {
            return Err(KatzError::UnsupportedOrientation);
        }
        if self.graph.properties().is_multigraph {
            return Err(KatzError::InvalidGraphInput(
                "katz requires pre-aggregated edge weights, graph is declared a multigraph".into(),
            ));
        }
        let n = self.graph.vertex_count();
        self.config.validate(n)?;

        self.current = match &self.config.initial_guess {
            Some(guess) => guess.clone(),
            None => (0..n).map(|v| self.config.beta_at(v)).collect(),
        };
        self.next = vec![W::zero(); n];
        self.iterations = 0;
        self.error = W::infinity();
        self.state = DriverState::Initialized;

        debug!(
            vertices = n,
            edges = self.graph.edge_count(),
            alpha = %self.config.alpha,
            epsilon = %self.config.epsilon,
            max_iterations = self.config.max_iterations,
            "katz initialized"
        );
        Ok(())
    }

    /// Runs one pass: update, convergence check, buffer swap.
    ///
    /// Initializes first if needed. Once terminal, returns the final status
    /// without doing any work.
    ///
    /// # Errors
    ///
    /// Initialization errors, or [`KatzError::NumericalDivergence`] when the pass
    /// produced a non-finite score.
    pub fn step(&mut self) -> Result<StepOutcome<W>> {
        match self.state {
            DriverState::Uninitialized => self.initialize()?,
            DriverState::Initialized | DriverState::Iterating => {}
            DriverState::Converged | DriverState::MaxIterationsExceeded | DriverState::Finalized => {
                if let Some(status) = self.outcome {
                    return Ok(StepOutcome::Finished(status));
                }
            }
        }

        let n = self.graph.vertex_count();
        let incoming = self.graph.incoming()?;
        let parallel = !self.ctx.is_sequential();
        let config = self.config;
        let (current, next) = (&self.current, &mut self.next);

        let error = self.ctx.install(|| {
            iteration::katz_pass(
                incoming,
                current,
                next,
                config.alpha,
                |v| config.beta_at(v),
                parallel,
            );
            convergence::l1_error(current, next, parallel)
        });

        self.iterations += 1;
        self.error = error;

        if !error.is_finite() {
            warn!(iteration = self.iterations, "katz diverged");
            return Err(KatzError::NumericalDivergence {
                iteration: self.iterations,
            });
        }

        mem::swap(&mut self.current, &mut self.next);
        trace!(iteration = self.iterations, error = %error, "katz iteration");

        if convergence::has_converged(error, n, config.epsilon) {
            self.state = DriverState::Converged;
            self.outcome = Some(ConvergenceStatus::Converged);
            debug!(iterations = self.iterations, error = %error, "katz converged");
            Ok(StepOutcome::Finished(ConvergenceStatus::Converged))
        } else if self.iterations >= config.max_iterations {
            self.state = DriverState::MaxIterationsExceeded;
            self.outcome = Some(ConvergenceStatus::MaxIterationsExceeded);
            warn!(
                iterations = self.iterations,
                error = %error,
                "katz did not converge within max_iterations"
            );
            Ok(StepOutcome::Finished(ConvergenceStatus::MaxIterationsExceeded))
        } else {
            self.state = DriverState::Iterating;
            Ok(StepOutcome::Continue {
                iteration: self.iterations,
                error,
            })
        }
    }

    /// Iterates until convergence or the budget runs out.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn run(&mut self) -> Result<ConvergenceStatus> {
        loop {
            if let StepOutcome::Finished(status) = self.step()? {
                return Ok(status);
            }
        }
    }

    /// Runs to termination if needed, normalizes, and assembles the result.
    ///
    /// Calling it again returns the same result.
    ///
    /// # Errors
    ///
    /// Any error from [`run`](Self::run), or [`KatzError::MaxIterationsExceeded`]
    /// under strict convergence.
    pub fn finalize(&mut self) -> Result<KatzResult<W>> {
        let status = self.run()?;

        if status == ConvergenceStatus::MaxIterationsExceeded && self.config.strict_convergence {
            return Err(KatzError::MaxIterationsExceeded {
                iterations: self.iterations,
                error: self.error.to_f64().unwrap_or(f64::NAN),
            });
        }

        if self.state != DriverState::Finalized {
            normalize::normalize(&mut self.current, self.config.normalization);
            self.next = Vec::new();
            self.state = DriverState::Finalized;
        }

        Ok(KatzResult::new(
            self.graph.vertex_ids(),
            self.current.clone(),
            self.iterations,
            self.error,
            status,
        ))
    }
}

/// Computes Katz centrality of every vertex of `graph`.
///
/// # Errors
///
/// See [`KatzDriver::initialize`], [`KatzDriver::step`] and
/// [`KatzDriver::finalize`].
pub fn katz_centrality<W: Weight>(
    ctx: &ComputeContext,
    graph: &Graph<W>,
    config: &KatzConfig<W>,
) -> Result<KatzResult<W>> {
    let mut driver = KatzDriver::new(ctx, graph, config);
    driver.initialize()?;
    driver.finalize()
}

/// A damping factor that guarantees convergence on `graph`.
///
/// Returns `1 / (s_max + 1)` where `s_max` is the largest weighted in-strength
/// \(\max_v \sum_{u \to v} |w(u, v)|\), an upper bound on the spectral radius.
pub fn convergent_alpha<W: Weight>(graph: &Graph<W>) -> W {
    let adjacency = graph.adjacency();
    let n = adjacency.vertex_count();
    let mut strength = vec![W::zero(); n];
    for v in 0..n {
        for (u, w) in adjacency.neighbors(v) {
            let target = match adjacency.orientation() {
                Orientation::Incoming => v,
                Orientation::Outgoing => u,
            };
            strength[target] = strength[target] + w.abs();
        }
    }
    let max = strength.into_iter().fold(W::zero(), W::max);
    W::one() / (max + W::one())
}
