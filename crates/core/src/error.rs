//! Error types for the toolstate store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every failure is synchronous and local to the call that raised it: the
//! store never retries, never swallows, and never leaves partial state
//! behind on any error path.

use crate::path::KeyPath;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the toolstate store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required key (root-level or path terminal) is absent
    #[error("key not found: {0}")]
    KeyNotFound(KeyPath),

    /// A non-terminal path segment was absent or resolved to a non-map value
    ///
    /// `prefix` holds exactly the keys consumed through the offending
    /// segment, so callers can report how deep the mismatch occurred.
    #[error("{prefix} is not a map")]
    Path {
        /// Keys consumed up to and including the offending segment
        prefix: KeyPath,
    },

    /// A compound operation was applied to a value of an incompatible shape
    #[error("wrong type: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected shape
        expected: &'static str,
        /// Actual shape found
        actual: &'static str,
    },

    /// A caller-supplied transform failed
    ///
    /// The target entry keeps its prior value; the store only writes after
    /// a transform returns successfully.
    #[error("transform failed: {0}")]
    Transform(String),
}

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }

    /// Check if this is a path resolution error.
    pub fn is_path(&self) -> bool {
        matches!(self, Error::Path { .. })
    }

    /// Check if this is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}
