//! Toolstate - thread-safe nested state for concurrent tool runs
//!
//! Toolstate provides a single shared [`DataStore`] that a pool of worker
//! threads can read, write, and atomically transform without any external
//! locking. Nested locations are addressed with a [`KeyPath`], and compound
//! operations (increment, append, concat, arbitrary transforms) are applied
//! as indivisible units.
//!
//! # Quick Start
//!
//! ```
//! use toolstate::prelude::*;
//!
//! let store = DataStore::new();
//!
//! // Record per-run counters
//! store.set("counters", serde_json::json!({"success": 0, "fail": 0}));
//! store.operate(["counters", "success"], |v| match v {
//!     Value::I64(n) => Ok(Value::I64(n + 1)),
//!     other => Ok(other),
//! })?;
//!
//! // Accumulate results
//! store.set("results", serde_json::json!([]));
//! store.append("results", "tool output")?;
//! # Ok::<(), toolstate::Error>(())
//! ```
//!
//! # Architecture
//!
//! One mutex per store guards the whole root container; every operation,
//! including path resolution and transform application, runs inside that one
//! critical section. Transforms must never call back into the same store.

pub use toolstate_core::{error, path, value};
pub use toolstate_core::{Error, KeyPath, Result, Value};
pub use toolstate_store::DataStore;

pub mod prelude;
