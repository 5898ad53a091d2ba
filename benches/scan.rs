use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};
use rowcsv::Session;

fn synthetic_csv(rows: usize) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.csv");
    let mut data = String::from("id,name,score,active\n");
    for i in 0..rows {
        writeln!(data, "{i},user_{i},{}.5,true", i % 100).unwrap();
    }
    fs::write(&path, data).unwrap();
    (dir, path)
}

fn bench_full_scan(c: &mut Criterion) {
    let (_dir, path) = synthetic_csv(10_000);
    c.bench_function("scan_10k_rows", |b| {
        b.iter(|| {
            let mut session = Session::open(&path).unwrap();
            let mut rows = 0u64;
            while let Some(row) = session.next_row().unwrap() {
                rows += row.field_count() as u64;
            }
            rows
        })
    });
}

fn bench_typed_access(c: &mut Criterion) {
    let (_dir, path) = synthetic_csv(10_000);
    c.bench_function("typed_access_10k_rows", |b| {
        b.iter(|| {
            let mut session = Session::open(&path).unwrap();
            session.next_row().unwrap();
            let mut total = 0i64;
            while let Some(row) = session.next_row().unwrap() {
                total += row.cell_at(1).to_i64(None).unwrap();
            }
            total
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let (_dir, path) = synthetic_csv(10_000);
    let mut session = Session::open(&path).unwrap();
    c.bench_function("fuzzy_find_all_10k_rows", |b| {
        b.iter(|| session.find_all("user_99", true).unwrap().len())
    });
}

criterion_group!(benches, bench_full_scan, bench_typed_access, bench_search);
criterion_main!(benches);
