//! Core types for the toolstate store
//!
//! This crate defines the data model shared by every layer of toolstate:
//!
//! - [`Value`]: closed tagged union over everything the store can hold
//! - [`KeyPath`]: ordered string keys addressing a nested location
//! - [`Error`] / [`Result`]: the store's complete failure taxonomy
//!
//! No storage or locking lives here; see the `toolstate-store` crate.

pub mod error;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use path::KeyPath;
pub use value::Value;
