//! Key paths for nested access
//!
//! This module defines [`KeyPath`]: an ordered sequence of string keys
//! addressing a location reachable by repeatedly indexing into nested
//! [`Value::Map`](crate::Value) containers. A path of length 1 addresses a
//! root-level entry directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path of string keys into nested maps
///
/// # Examples
///
/// ```
/// use toolstate_core::KeyPath;
///
/// // Build paths
/// let counter = KeyPath::new("counters").key("success");
/// assert_eq!(counter.len(), 2);
///
/// // Convert from common shapes
/// let single: KeyPath = "counters".into();
/// let nested: KeyPath = ["counters", "success"].into();
/// assert_eq!(counter, nested);
///
/// // Diagnostic rendering
/// assert_eq!(nested.to_string(), "[counters][success]");
/// # let _ = single;
/// ```
///
/// Paths handed to the store must be non-empty; the store reports an empty
/// path as a structural failure rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a single-segment path addressing a root-level entry
    pub fn new(key: impl Into<String>) -> Self {
        KeyPath {
            segments: vec![key.into()],
        }
    }

    /// Create a path from a vector of segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        KeyPath { segments }
    }

    /// Append a key segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the terminal key and the non-terminal segments
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }

    /// The first `n` segments as a new path
    ///
    /// Used for the consumed-prefix diagnostic when resolution diverges
    /// partway down the path.
    pub fn prefix(&self, n: usize) -> KeyPath {
        KeyPath {
            segments: self.segments[..n.min(self.segments.len())].to_vec(),
        }
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        KeyPath::new(key)
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        KeyPath::new(key)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        KeyPath { segments }
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        KeyPath {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

// Renders like `[outer][inner]`, matching the store's error diagnostics
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "[{}]", segment)?;
        }
        Ok(())
    }
}
