//! Benchmarks for metricstore append and scan operations

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use metricstore::{MetricStore, StoreConfig};

const RECORDS: usize = 10_000;
const CAPACITY: usize = 1024 * 1024;

fn filled_store() -> MetricStore {
    let config = StoreConfig::builder().capacity(CAPACITY).build();
    let mut store = MetricStore::open(&config).unwrap();
    let mut writer = store.writer();
    for i in 0..RECORDS {
        writer.append(i as i64, "service.requests.latency", i as f64).unwrap();
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(RECORDS as u64));

    group.bench_function("append", |b| {
        let config = StoreConfig::builder().capacity(CAPACITY).build();
        b.iter(|| {
            let mut store = MetricStore::open(&config).unwrap();
            let mut writer = store.writer();
            for i in 0..RECORDS {
                writer
                    .append(black_box(i as i64), "service.requests.latency", black_box(1.5))
                    .unwrap();
            }
        });
    });

    let store = filled_store();

    group.bench_function("cursor_scan", |b| {
        b.iter(|| {
            let mut cursor = store.cursor();
            let mut sum = 0.0;
            while cursor.has_next() {
                sum += cursor.value().unwrap();
                cursor.next().unwrap();
            }
            black_box(sum)
        });
    });

    group.bench_function("iter_names", |b| {
        b.iter(|| {
            let total: usize = store.iter().map(|r| r.unwrap().name.len()).sum();
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
