//! Benchmarks for the Myers engine.
//!
//! Compares fingerprinted and plain path search on generated source-like
//! text with a sprinkling of edits.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqdiff_crypto::HashAlgorithm;
use seqdiff_diff::{DiffConfig, DiffEngine, MyersEngine};

fn generate(lines: usize) -> (Vec<String>, Vec<String>) {
    let original: Vec<String> = (0..lines)
        .map(|i| format!("    let value_{i} = compute(input, {}); // step {i}", i % 17))
        .collect();
    let mut revised = Vec::with_capacity(lines + lines / 50);
    for (i, line) in original.iter().enumerate() {
        match i % 97 {
            0 => revised.push(format!("{line} // reviewed")),
            13 => {}
            41 => {
                revised.push(line.clone());
                revised.push(format!("    trace!(step = {i});"));
            }
            _ => revised.push(line.clone()),
        }
    }
    (original, revised)
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers/diff");
    let configs = [
        ("sha256", DiffConfig::default()),
        ("blake3", DiffConfig::default().with_algorithm(HashAlgorithm::Blake3)),
        ("plain", DiffConfig::plain()),
    ];

    for lines in [500usize, 5_000, 20_000] {
        let (original, revised) = generate(lines);
        group.throughput(Throughput::Elements((original.len() + revised.len()) as u64));
        for (label, config) in &configs {
            let engine = MyersEngine::new(config.clone()).unwrap();
            group.bench_with_input(BenchmarkId::new(*label, lines), &lines, |b, _| {
                b.iter(|| engine.diff(black_box(&original), black_box(&revised)))
            });
        }
    }
    group.finish();
}

fn bench_patch(c: &mut Criterion) {
    let (original, revised) = generate(5_000);
    let patch = seqdiff_diff::diff(&original, &revised).unwrap();
    c.bench_function("myers/apply_patch", |b| b.iter(|| patch.apply_to(black_box(&original))));
}

criterion_group!(benches, bench_engines, bench_patch);
criterion_main!(benches);
