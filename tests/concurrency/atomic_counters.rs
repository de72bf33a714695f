//! Atomicity of compound counter operations
//!
//! For N concurrent `increment(key, 1)` calls against an initial value of 0,
//! the final value must equal N regardless of interleaving.

use std::thread;
use toolstate::prelude::*;

// ============================================================================
// increment / decrement
// ============================================================================

#[test]
fn concurrent_increments_sum_exactly() {
    const THREADS: usize = 8;
    const PER_THREAD: i64 = 250;

    let store = DataStore::new();
    store.set("count", 0i64);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    store.increment("count", 1).unwrap();
                }
            });
        }
    });

    assert_eq!(
        store.get("count").unwrap(),
        Value::I64(THREADS as i64 * PER_THREAD),
        "no increment may be lost under contention"
    );
}

#[test]
fn mixed_increment_decrement_balances() {
    let store = DataStore::new();
    store.set("balance", 0i64);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    store.increment("balance", 3).unwrap();
                }
            });
            s.spawn(|| {
                for _ in 0..100 {
                    store.decrement("balance", 3).unwrap();
                }
            });
        }
    });

    assert_eq!(store.get("balance").unwrap(), Value::I64(0));
}

// ============================================================================
// operate on nested counters
// ============================================================================

#[test]
fn two_threads_five_nested_operates_each() {
    let store = DataStore::new();
    store.set("counters", serde_json::json!({"success": 0, "fail": 0}));

    thread::scope(|s| {
        for _ in 0..2 {
            s.spawn(|| {
                for _ in 0..5 {
                    store
                        .operate(["counters", "success"], |v| match v {
                            Value::I64(n) => Ok(Value::I64(n + 1)),
                            other => Err(Error::TypeMismatch {
                                expected: "number",
                                actual: other.type_name(),
                            }),
                        })
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(
        store.get("counters").unwrap(),
        serde_json::json!({"success": 10, "fail": 0}).into()
    );
}

#[test]
fn concurrent_appends_keep_every_element() {
    const THREADS: i64 = 6;
    const PER_THREAD: i64 = 50;

    let store = DataStore::new();
    store.set("log", serde_json::json!([]));

    let store = &store;
    thread::scope(|s| {
        for t in 0..THREADS {
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    store.append("log", t * PER_THREAD + i).unwrap();
                }
            });
        }
    });

    let log = store.get("log").unwrap();
    let items = log.as_array().unwrap();
    assert_eq!(items.len(), (THREADS * PER_THREAD) as usize);

    // Every element appended exactly once, in some interleaved order
    let mut seen: Vec<i64> = items.iter().map(|v| v.as_i64().unwrap()).collect();
    seen.sort_unstable();
    let expected: Vec<i64> = (0..THREADS * PER_THREAD).collect();
    assert_eq!(seen, expected);
}
