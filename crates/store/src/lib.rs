//! Concurrent, path-addressable key-value store
//!
//! One coarse lock per store serializes every operation, giving each
//! compound read-modify-write an indivisible view of the nested state. See
//! [`DataStore`] for the full concurrency and reentrancy contract.

mod resolve;
pub mod store;

pub use store::DataStore;
