//! Path resolution over nested maps
//!
//! A pure walk used only while the store's lock is held: given the root
//! container and a [`KeyPath`], yield the mutable slot at the path's end or
//! a structured failure naming exactly where resolution diverged.
//!
//! Resolution is read-only; it never mutates the container. The caller
//! applies its transform to the returned slot only after the whole path has
//! resolved, so a failing path leaves the store untouched.

use std::collections::HashMap;
use toolstate_core::{Error, KeyPath, Result, Value};

/// Resolve `path` against `root`, returning the mutable terminal slot.
///
/// Each non-terminal segment must name an existing `Value::Map` entry;
/// otherwise the walk fails with `Error::Path` carrying the keys consumed
/// through the offending segment. An absent terminal key fails with
/// `Error::KeyNotFound` carrying the full path.
pub(crate) fn resolve_slot_mut<'a>(
    root: &'a mut HashMap<String, Value>,
    path: &KeyPath,
) -> Result<&'a mut Value> {
    let Some((terminal, parents)) = path.split_last() else {
        // Empty paths violate the caller contract; surfaced, not panicked.
        return Err(Error::Path {
            prefix: KeyPath::default(),
        });
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current.get_mut(segment) {
            Some(Value::Map(inner)) => inner,
            _ => {
                return Err(Error::Path {
                    prefix: path.prefix(depth + 1),
                })
            }
        };
    }

    current
        .get_mut(terminal.as_str())
        .ok_or_else(|| Error::KeyNotFound(path.clone()))
}
