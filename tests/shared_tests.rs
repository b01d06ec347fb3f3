//! SharedMetricStore tests
//!
//! These tests verify:
//! - Appends and reads through the shared handle
//! - Readers never observe a partially published append
//! - Unwrapping the last handle

use std::thread;

use metricstore::{MetricStore, SharedMetricStore, StoreConfig, StoreError};

fn shared_store(capacity: usize) -> SharedMetricStore {
    let config = StoreConfig::builder().capacity(capacity).build();
    SharedMetricStore::new(MetricStore::open(&config).unwrap())
}

#[test]
fn test_append_and_read() {
    let shared = shared_store(1024);

    shared.append(1, "cpu.usage", 75.5).unwrap();
    shared.append(2, "memory.free", 2048.0).unwrap();

    assert_eq!(shared.entry_count(), 2);
    assert_eq!(shared.bytes_used(), 80);

    let names = shared.read(|store| {
        let mut names = Vec::new();
        let mut cursor = store.cursor();
        while cursor.has_next() {
            names.push(cursor.metric_name().unwrap().into_owned());
            cursor.next().unwrap();
        }
        names
    });
    assert_eq!(names, vec!["cpu.usage", "memory.free"]);
}

#[test]
fn test_batch_write() {
    let shared = shared_store(1024);

    let result = shared.write(|writer| {
        writer.append(1, "a", 1.0)?;
        writer.append(2, "b", 2.0)?;
        Ok::<_, StoreError>(writer.count())
    });

    assert_eq!(result, Ok(2));
    assert_eq!(shared.stats().entry_count, 2);
}

#[test]
fn test_errors_propagate_through_handle() {
    let shared = shared_store(32);

    shared.append(1, "fits", 1.0).unwrap();
    assert!(matches!(
        shared.append(2, "too-much", 2.0),
        Err(StoreError::CapacityExceeded { .. })
    ));
    assert_eq!(shared.entry_count(), 1);
}

#[test]
fn test_readers_see_whole_appends() {
    const RECORDS: usize = 500;
    let shared = shared_store(32 * 1024);

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..RECORDS {
                shared
                    .append(i as i64, &format!("metric.{}", i), i as f64)
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut last_seen = 0;
                while last_seen < RECORDS {
                    let (scanned, entry_count, bytes_used, position) = shared.read(|store| {
                        let mut cursor = store.cursor();
                        let mut scanned = 0;
                        while cursor.has_next() {
                            assert_eq!(cursor.value().unwrap(), scanned as f64);
                            cursor.next().unwrap();
                            scanned += 1;
                        }
                        (scanned, store.entry_count(), store.bytes_used(), cursor.position())
                    });

                    assert_eq!(scanned, entry_count);
                    assert_eq!(position, bytes_used);
                    assert!(scanned >= last_seen);
                    last_seen = scanned;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(shared.entry_count(), RECORDS);
}

#[test]
fn test_collect_records() {
    let shared = shared_store(512);
    shared.append(5, "disk.io.read", 1024.5).unwrap();

    let records = shared.collect_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "disk.io.read");
    assert_eq!(records[0].timestamp, 5);
}

#[test]
fn test_into_inner() {
    let shared = shared_store(256);
    shared.append(1, "x", 1.0).unwrap();

    let other = shared.clone();
    let shared = match shared.into_inner() {
        Ok(_) => panic!("Expected handle back while a clone exists"),
        Err(handle) => handle,
    };
    drop(other);

    let store = match shared.into_inner() {
        Ok(store) => store,
        Err(_) => panic!("Expected store from last handle"),
    };
    assert_eq!(store.entry_count(), 1);
}
