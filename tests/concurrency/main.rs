//! Concurrency Integration Tests
//!
//! Exercises the store's single critical section from many threads:
//! compound operations must be indivisible, failures must leave no partial
//! state, and snapshots must never observe in-flight mutation.

mod atomic_counters;
mod snapshot_isolation;
mod stress;
