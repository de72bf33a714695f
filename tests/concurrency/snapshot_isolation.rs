//! Snapshot accessors are point-in-time copies
//!
//! `keys`/`values`/`items` reflect the store at the instant the lock was
//! held; they never observe later mutation and never expose a live view
//! into the container.

use std::thread;
use toolstate::prelude::*;

#[test]
fn items_snapshot_unaffected_by_later_set() {
    let store = DataStore::new();
    store.set("k", 1i64);

    let snapshot = store.items();
    store.set("k", 2i64);
    store.set("other", 3i64);

    assert_eq!(snapshot, vec![("k".to_string(), Value::I64(1))]);
}

#[test]
fn snapshots_under_concurrent_writers_are_internally_consistent() {
    const WRITES: i64 = 300;

    let store = DataStore::new();
    store.set("count", 0i64);

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..WRITES {
                store.increment("count", 1).unwrap();
            }
        });
        s.spawn(|| {
            // Each snapshot must hold a value that was true at some instant:
            // monotonically nondecreasing and within range.
            let mut last = 0i64;
            for _ in 0..WRITES {
                let items = store.items();
                let (_, value) = items
                    .iter()
                    .find(|(k, _)| k == "count")
                    .expect("count key always present");
                let n = value.as_i64().expect("counter stays an integer");
                assert!(n >= last, "snapshot went backwards: {n} < {last}");
                assert!(n <= WRITES);
                last = n;
            }
        });
    });

    assert_eq!(store.get("count").unwrap(), Value::I64(WRITES));
}

#[test]
fn two_snapshots_around_a_write_may_differ() {
    let store = DataStore::new();
    store.set("k", 1i64);

    let first = store.keys();
    store.set("extra", 2i64);
    let second = store.keys();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
}
