//! Error types.

use thiserror::Error;

/// Errors reported by tour construction, improvement and the solve pipeline.
///
/// Running out of time is not an error: the improver returns its current
/// tour when the deadline passes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Empty or malformed point set, or a seed that is not a permutation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tour that is not a closed permutation of the point indices.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// Solver configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, TspError>;
