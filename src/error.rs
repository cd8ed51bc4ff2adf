//! Error types for sparsegraph

use crate::graph::ViewFlags;
use thiserror::Error;

/// Result type alias using sparsegraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting arrays or building graphs
#[derive(Error, Debug)]
pub enum Error {
    /// The requested view set cannot be built in a single pass
    ///
    /// Raised before any input array is read or written.
    #[error("Unsupported view configuration {views}: {reason}")]
    UnsupportedConfiguration {
        /// The rejected view set
        views: ViewFlags,
        /// Why the combination is rejected
        reason: &'static str,
    },

    /// Array length does not match what an operation requires
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported view configuration error
    pub fn unsupported_views(views: ViewFlags, reason: &'static str) -> Self {
        Self::UnsupportedConfiguration { views, reason }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::shape_mismatch(&[5], &[4]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [5], got [4]");

        let err = Error::unsupported_views(
            ViewFlags::CSR | ViewFlags::CSC,
            "CSC and CSR views are not supported together",
        );
        assert_eq!(
            err.to_string(),
            "Unsupported view configuration CSR|CSC: CSC and CSR views are not supported together"
        );
    }
}
