//! Solver configuration.
//!
//! Controls the caller-level policy of [`solve`](crate::solver::solve): how
//! long 2-opt may run, and from which size on the greedy tour is returned
//! without improvement. Deserializable, so it can be embedded in a larger
//! configuration file.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use u_tour::config::SolverConfig;
//!
//! let config = SolverConfig::default();
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(1200)));
//! assert_eq!(config.greedy_threshold, 1500);
//!
//! let quick = SolverConfig::default().with_time_limit_secs(2.5);
//! assert_eq!(quick.time_limit(), Some(Duration::from_millis(2500)));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::local_search::{check_epsilon, ImproveOptions, DEFAULT_EPSILON, DEFAULT_MATRIX_LIMIT};

/// Default wall-clock budget for 2-opt, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 1200.0;

/// Default point count from which 2-opt is skipped.
pub const DEFAULT_GREEDY_THRESHOLD: usize = 1500;

/// Configuration for [`solve`](crate::solver::solve).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Wall-clock budget for 2-opt in seconds; `None` runs to a local optimum.
    pub time_limit_secs: Option<f64>,

    /// Instances with at least this many points get the greedy tour only.
    pub greedy_threshold: usize,

    /// Minimum gain for accepting a 2-opt move; must be positive.
    pub epsilon: f64,

    /// Largest instance for which a distance matrix is precomputed.
    pub matrix_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: Some(DEFAULT_TIME_LIMIT_SECS),
            greedy_threshold: DEFAULT_GREEDY_THRESHOLD,
            epsilon: DEFAULT_EPSILON,
            matrix_limit: DEFAULT_MATRIX_LIMIT,
        }
    }
}

impl SolverConfig {
    /// Sets the 2-opt time budget in seconds.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Removes the 2-opt time budget.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_secs = None;
        self
    }

    /// Sets the greedy-only size threshold.
    pub fn with_greedy_threshold(mut self, threshold: usize) -> Self {
        self.greedy_threshold = threshold;
        self
    }

    /// Checks that all values are in range.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfig`] for a negative or non-finite time limit, or
    /// an epsilon that is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if let Some(secs) = self.time_limit_secs {
            if !secs.is_finite() || secs < 0.0 {
                return Err(TspError::InvalidConfig(format!(
                    "time_limit_secs must be a non-negative finite number, got {secs}"
                )));
            }
        }
        check_epsilon(self.epsilon)
    }

    /// The 2-opt time budget, if any.
    ///
    /// Returns `None` for values [`validate`](Self::validate) would reject.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    /// Options passed through to [`improve_with`](crate::local_search::improve_with).
    pub fn improve_options(&self) -> ImproveOptions {
        ImproveOptions {
            epsilon: self.epsilon,
            matrix_limit: self.matrix_limit,
        }
    }
}
