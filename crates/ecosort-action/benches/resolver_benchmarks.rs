//! Benchmarks for waste-category resolution.
//!
//! Resolution is a scan of every rule's keywords over the lowercased input,
//! so the worst case is an input that matches nothing.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecosort_action::CategoryResolver;

/// Slot values cycling through every outcome.
fn generate_inputs() -> Vec<Option<String>> {
    let samples = [
        Some("plastic bottle"),
        Some("Flattened CARDBOARD boxes"),
        Some("old laptop device"),
        Some("leftover food scraps"),
        Some("rubber tires"),
        Some("   "),
        None,
    ];
    (0..700)
        .map(|i| samples[i % samples.len()].map(str::to_string))
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = CategoryResolver::default();
    let inputs = generate_inputs();
    let unmatched = "a long description of some rubber garden hoses and tires ".repeat(8);

    let mut group = c.benchmark_group("category_resolution");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("mixed_inputs", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let input = inputs[idx % inputs.len()].as_deref();
            idx += 1;
            resolver.resolve(black_box(input))
        });
    });

    group.bench_function("first_rule_hit", |b| {
        b.iter(|| resolver.resolve(black_box(Some("plastic bottle"))));
    });

    group.bench_function("unmatched_long_input", |b| {
        b.iter(|| resolver.resolve(black_box(Some(unmatched.as_str()))));
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
