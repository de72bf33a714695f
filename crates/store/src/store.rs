//! DataStore: thread-safe nested key-value state
//!
//! ## Design
//!
//! One `parking_lot::Mutex` guards the whole root container. Every public
//! operation holds the lock for its full duration, including path resolution
//! and transform application, so each compound read-modify-write is observed
//! as indivisible. There is no read/write distinction and no per-key
//! locking: correctness stays auditable at the cost of head-of-line
//! blocking under contention.
//!
//! ## Thread Safety
//!
//! `DataStore` is `Send + Sync`. The intended pattern is one store per
//! logical run, shared by `Arc` across worker threads that record counters
//! and accumulated results without any external locking.
//!
//! ## Reentrancy
//!
//! Transforms passed to [`update`](DataStore::update) /
//! [`operate`](DataStore::operate) (and the compound helpers built on them)
//! MUST NOT call back into the same store, directly or indirectly: the lock
//! is not reentrant and such a call deadlocks. Transforms are expected to be
//! fast, CPU-only functions of their input.
//!
//! ## API
//!
//! - **Primitive operations**: `get`, `set`, `contains`, `delete`, `len`
//! - **Snapshot accessors**: `keys`, `values`, `items` - independent copies,
//!   safe to iterate without observing concurrent mutation
//! - **Atomic read-modify-write**: `update` (root key), `operate` (key path)
//! - **Compound helpers**: `increment`, `decrement`, `append`, `concat`

use crate::resolve::resolve_slot_mut;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use toolstate_core::{Error, KeyPath, Result, Value};
use tracing::trace;

/// Thread-safe, path-addressable key-value store
///
/// # Example
///
/// ```
/// use toolstate_store::DataStore;
/// use toolstate_core::Value;
///
/// let store = DataStore::new();
/// store.set("counters", serde_json::json!({"success": 0}));
/// store.operate(["counters", "success"], |v| match v {
///     Value::I64(n) => Ok(Value::I64(n + 1)),
///     other => Ok(other),
/// })?;
/// assert_eq!(store.get("counters")?, serde_json::json!({"success": 1}).into());
/// # Ok::<(), toolstate_core::Error>(())
/// ```
#[derive(Default)]
pub struct DataStore {
    data: Mutex<HashMap<String, Value>>,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Primitive operations ==========

    /// Get a clone of the value at a root-level key
    ///
    /// The returned value is caller-owned; mutating it does not affect the
    /// store.
    pub fn get(&self, key: &str) -> Result<Value> {
        let data = self.data.lock();
        data.get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(KeyPath::new(key)))
    }

    /// Set a root-level key, inserting or overwriting
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        trace!(key = %key, "set");
        self.data.lock().insert(key, value.into());
    }

    /// Check if a root-level key exists
    pub fn contains(&self, key: &str) -> bool {
        self.data.lock().contains_key(key)
    }

    /// Delete a root-level key
    ///
    /// Fails with `KeyNotFound` if the key is absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        trace!(key = %key, "delete");
        match self.data.lock().remove(key) {
            Some(_) => Ok(()),
            None => Err(Error::KeyNotFound(KeyPath::new(key))),
        }
    }

    /// Number of root-level entries
    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    /// Check if the store has no entries
    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }

    // ========== Snapshot accessors ==========
    //
    // Each returns a point-in-time copy taken while the lock was held. The
    // copies never observe later mutation and are safe to iterate lock-free.

    /// Snapshot of the root-level keys
    pub fn keys(&self) -> Vec<String> {
        self.data.lock().keys().cloned().collect()
    }

    /// Snapshot of the root-level values
    pub fn values(&self) -> Vec<Value> {
        self.data.lock().values().cloned().collect()
    }

    /// Snapshot of the root-level (key, value) pairs
    pub fn items(&self) -> Vec<(String, Value)> {
        self.data
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ========== Atomic read-modify-write ==========

    /// Atomically replace the entry at `key` with `transform(current)`
    ///
    /// Returns the new value. Fails with `KeyNotFound` if the key is absent:
    /// this mutates an existing entry, it is not an upsert. If the transform
    /// fails, its error propagates and the entry keeps its prior value.
    ///
    /// The transform runs while the store's lock is held and must not call
    /// back into this store.
    pub fn update<F>(&self, key: &str, transform: F) -> Result<Value>
    where
        F: FnOnce(Value) -> Result<Value>,
    {
        let mut data = self.data.lock();
        let current = data
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(KeyPath::new(key)))?;
        let next = transform(current)?;
        trace!(key = %key, "update");
        data.insert(key.to_string(), next.clone());
        Ok(next)
    }

    /// Atomically replace the value at `path` with `transform(current)`
    ///
    /// The target slot is resolved through nested maps before the transform
    /// is applied; resolution failures (`Path`, `KeyNotFound`) propagate
    /// unchanged and nothing is written. Same atomicity and reentrancy
    /// contract as [`update`](DataStore::update).
    pub fn operate<P, F>(&self, path: P, transform: F) -> Result<()>
    where
        P: Into<KeyPath>,
        F: FnOnce(Value) -> Result<Value>,
    {
        let path = path.into();
        let mut data = self.data.lock();
        let slot = resolve_slot_mut(&mut data, &path)?;
        let next = transform(slot.clone())?;
        trace!(path = %path, "operate");
        *slot = next;
        Ok(())
    }

    // ========== Compound helpers ==========
    //
    // Intention-revealing transforms over update/operate. No new locking
    // behavior; the same reentrancy contract applies.

    /// Atomically add `amount` to the numeric value at `key`
    ///
    /// Returns the new value. Fails with `TypeMismatch` if the current value
    /// is not numeric; integer overflow is a `Transform` failure.
    pub fn increment(&self, key: &str, amount: i64) -> Result<Value> {
        self.update(key, move |current| add_scalar(current, amount))
    }

    /// Atomically subtract `amount` from the numeric value at `key`
    pub fn decrement(&self, key: &str, amount: i64) -> Result<Value> {
        self.update(key, move |current| sub_scalar(current, amount))
    }

    /// Atomically push `value` onto the array at `path`
    ///
    /// Fails with `TypeMismatch` if the resolved value is not an array.
    pub fn append<P>(&self, path: P, value: impl Into<Value>) -> Result<()>
    where
        P: Into<KeyPath>,
    {
        let value = value.into();
        self.operate(path, move |current| match current {
            Value::Array(mut items) => {
                items.push(value);
                Ok(Value::Array(items))
            }
            other => Err(Error::TypeMismatch {
                expected: "array",
                actual: other.type_name(),
            }),
        })
    }

    /// Atomically concatenate `value` onto the value at `path`
    ///
    /// Supports array + array and string + string; any other pairing fails
    /// with `TypeMismatch`.
    pub fn concat<P>(&self, path: P, value: impl Into<Value>) -> Result<()>
    where
        P: Into<KeyPath>,
    {
        let value = value.into();
        self.operate(path, move |current| match (current, value) {
            (Value::Array(mut items), Value::Array(tail)) => {
                items.extend(tail);
                Ok(Value::Array(items))
            }
            (Value::String(mut s), Value::String(tail)) => {
                s.push_str(&tail);
                Ok(Value::String(s))
            }
            (Value::Array(_), other) => Err(Error::TypeMismatch {
                expected: "array",
                actual: other.type_name(),
            }),
            (Value::String(_), other) => Err(Error::TypeMismatch {
                expected: "string",
                actual: other.type_name(),
            }),
            (other, _) => Err(Error::TypeMismatch {
                expected: "array or string",
                actual: other.type_name(),
            }),
        })
    }
}

fn add_scalar(current: Value, amount: i64) -> Result<Value> {
    match current {
        Value::I64(n) => n
            .checked_add(amount)
            .map(Value::I64)
            .ok_or_else(|| Error::Transform(format!("integer overflow adding {amount} to {n}"))),
        Value::F64(n) => Ok(Value::F64(n + amount as f64)),
        other => Err(Error::TypeMismatch {
            expected: "number",
            actual: other.type_name(),
        }),
    }
}

fn sub_scalar(current: Value, amount: i64) -> Result<Value> {
    match current {
        Value::I64(n) => n
            .checked_sub(amount)
            .map(Value::I64)
            .ok_or_else(|| {
                Error::Transform(format!("integer overflow subtracting {amount} from {n}"))
            }),
        Value::F64(n) => Ok(Value::F64(n - amount as f64)),
        other => Err(Error::TypeMismatch {
            expected: "number",
            actual: other.type_name(),
        }),
    }
}

// Renders the root container the way the event log expects:
// `{` / one tab-indented `key: value` line per entry / `}`.
impl fmt::Display for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.lock();
        if data.is_empty() {
            return write!(f, "{{}}");
        }
        writeln!(f, "{{")?;
        let mut first = true;
        for (key, value) in data.iter() {
            if !first {
                writeln!(f, ",")?;
            }
            write!(f, "\t{}: {}", key, value)?;
            first = false;
        }
        write!(f, "\n}}")
    }
}
