//! Randomized mixed-operation stress
//!
//! Threads interleave increments, appends, and private-key writes chosen at
//! random; the totals must still come out exact.

use rand::Rng;
use std::thread;
use toolstate::prelude::*;

#[test]
fn randomized_mixed_operations_keep_exact_totals() {
    const THREADS: usize = 6;
    const OPS_PER_THREAD: usize = 400;

    let store = DataStore::new();
    store.set("count", 0i64);
    store.set("log", serde_json::json!([]));

    let store = &store;
    let totals: Vec<(i64, usize)> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                s.spawn(move || {
                    let mut rng = rand::thread_rng();
                    let mut increments = 0i64;
                    let mut appends = 0usize;
                    for i in 0..OPS_PER_THREAD {
                        match rng.gen_range(0..3) {
                            0 => {
                                store.increment("count", 1).unwrap();
                                increments += 1;
                            }
                            1 => {
                                store.append("log", format!("t{t}-{i}")).unwrap();
                                appends += 1;
                            }
                            _ => {
                                // Private key churn, invisible to the totals
                                store.set(format!("scratch-{t}"), i as i64);
                            }
                        }
                    }
                    (increments, appends)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected_count: i64 = totals.iter().map(|(inc, _)| inc).sum();
    let expected_log: usize = totals.iter().map(|(_, app)| app).sum();

    assert_eq!(store.get("count").unwrap(), Value::I64(expected_count));
    assert_eq!(
        store.get("log").unwrap().as_array().unwrap().len(),
        expected_log
    );
}
