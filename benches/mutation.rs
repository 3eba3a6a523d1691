
use config_generator::generate_config;
use criterion::{criterion_group, criterion_main, Criterion};
use iniconf::Document;

fn mutation_benchmarks(c: &mut Criterion) {
    let small = Document::parse(&generate_config(50)).unwrap();
    let large = Document::parse(&generate_config(1000)).unwrap();

    let mut group = c.benchmark_group("mutation");

    group.bench_function("set_existing_small", |b| {
        b.iter_batched(
            || small.clone(),
            |mut doc| doc.set("section0", "int_0", "42").unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("set_new_section_large", |b| {
        b.iter_batched(
            || large.clone(),
            |mut doc| doc.set("fresh", "key", "value").unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("set_then_serialize_large", |b| {
        b.iter_batched(
            || large.clone(),
            |mut doc| {
                doc.set("section3", "str_77", "updated").unwrap();
                doc.serialize()
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, mutation_benchmarks);
criterion_main!(benches);
