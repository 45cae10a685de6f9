//! Compute context: the scoped owner of the worker pool.
//!
//! A [`ComputeContext`] is created once per session and handed to the driver by
//! reference. With the `parallel` feature it may own a dedicated `rayon` pool; the
//! pool is released when the context is dropped.

use serde::{Deserialize, Serialize};

use crate::error::{KatzError, Result};

/// Configuration for a [`ComputeContext`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Worker threads for a dedicated pool.
    ///
    /// `None` runs on the global `rayon` pool. `Some(1)` forces sequential passes.
    pub num_threads: Option<usize>,
}

/// Owns the compute resources used by a Katz session.
pub struct ComputeContext {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
    sequential: bool,
}

impl ComputeContext {
    /// Acquires compute resources according to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`KatzError::InvalidParameter`] for `num_threads == Some(0)` and
    /// [`KatzError::ThreadPool`] if the pool cannot be spawned.
    pub fn new(config: &ContextConfig) -> Result<Self> {
        match config.num_threads {
            Some(0) => Err(KatzError::InvalidParameter(
                "num_threads must be > 0".into(),
            )),
            Some(1) => Ok(Self::sequential()),
            #[cfg(feature = "parallel")]
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("katz-worker-{i}"))
                    .build()
                    .map_err(|e| KatzError::ThreadPool(e.to_string()))?;
                debug!(threads, "acquired dedicated compute pool");
                Ok(Self {
                    pool: Some(pool),
                    sequential: false,
                })
            }
            #[cfg(not(feature = "parallel"))]
            Some(_) => Ok(Self::sequential()),
            None => Ok(Self {
                #[cfg(feature = "parallel")]
                pool: None,
                sequential: !cfg!(feature = "parallel"),
            }),
        }
    }

    /// A context that runs every pass on the calling thread.
    pub fn sequential() -> Self {
        Self {
            #[cfg(feature = "parallel")]
            pool: None,
            sequential: true,
        }
    }

    /// Whether per-vertex passes run on the calling thread only.
    #[inline]
    pub fn is_sequential(&self) -> bool {
        self.sequential
    }

    /// Number of workers available to a pass.
    pub fn num_threads(&self) -> usize {
        if self.sequential {
            return 1;
        }
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.current_num_threads(),
                None => rayon::current_num_threads(),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Runs `op` inside this context's pool (or inline when there is none).
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(op);
            }
        }
        op()
    }
}

impl Default for ComputeContext {
    fn default() -> Self {
        Self {
            #[cfg(feature = "parallel")]
            pool: None,
            sequential: !cfg!(feature = "parallel"),
        }
    }
}

impl core::fmt::Debug for ComputeContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComputeContext")
            .field("sequential", &self.sequential)
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
