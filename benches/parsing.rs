
use config_generator::generate_config;
use criterion::{criterion_group, criterion_main, Criterion};
use iniconf::Document;

fn parsing_benchmarks(c: &mut Criterion) {
    // Generate configs of different sizes
    let small = generate_config(50);
    let medium = generate_config(300);
    let large = generate_config(1_000);
    let xlarge = generate_config(10_000);

    let mut group = c.benchmark_group("parsing");

    group.bench_function("small_50_lines", |b| {
        b.iter(|| Document::parse(&small).unwrap())
    });

    group.bench_function("medium_300_lines", |b| {
        b.iter(|| Document::parse(&medium).unwrap())
    });

    group.bench_function("large_1000_lines", |b| {
        b.iter(|| Document::parse(&large).unwrap())
    });

    group.bench_function("xlarge_10000_lines", |b| {
        b.iter(|| Document::parse(&xlarge).unwrap())
    });

    group.finish();
}

fn serialize_benchmark(c: &mut Criterion) {
    let doc = Document::parse(&generate_config(10_000)).unwrap();

    c.bench_function("serialize_10000_lines", |b| b.iter(|| doc.serialize()));
}

criterion_group!(benches, parsing_benchmarks, serialize_benchmark);
criterion_main!(benches);
