//! Convenience re-exports for common usage.
//!
//! ```
//! use toolstate::prelude::*;
//! ```

pub use crate::{DataStore, Error, KeyPath, Result, Value};
