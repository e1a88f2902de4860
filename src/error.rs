//! Error type for grid construction and worker-pool configuration.
//!
//! The smoothing kernels themselves have no recoverable failure modes: a
//! mis-sized buffer is a caller bug. Errors only arise where the crate builds
//! something on the caller's behalf (a `Grid` from raw cells, a worker pool).

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for smoother setup operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// A worker pool needs at least one thread.
    InvalidWorkerCount(usize),

    /// The rayon thread pool could not be built.
    ThreadPool(String),

    /// Grid dimension must be positive.
    EmptyGrid,

    /// Cell buffer length does not equal `dim * dim`.
    GridSizeMismatch {
        /// Requested grid side length.
        dim: usize,
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWorkerCount(n) => {
                write!(f, "Invalid worker count: {n} (must be at least 1)")
            }
            Self::ThreadPool(msg) => write!(f, "Failed to build worker pool: {msg}"),
            Self::EmptyGrid => write!(f, "Grid dimension must be positive"),
            Self::GridSizeMismatch {
                dim,
                expected,
                actual,
            } => write!(
                f,
                "Grid of dimension {dim} needs {expected} cells, got {actual}"
            ),
        }
    }
}

impl Error for SmoothError {}

impl From<rayon::ThreadPoolBuildError> for SmoothError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}
