//! Performance benchmarks for credential classification
//!
//! Measures classification of each credential kind and of unrecognized
//! input, which walks every recognizer.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parley::credentials::{canonicalize_phone, region, CredentialClassifier};

const INPUTS: [(&str, &str); 5] = [
    ("email", "alice.smith@example.com"),
    ("phone", "+1 (415) 555-0100"),
    ("url", "https://parley.chat/login"),
    ("ip", "192.168.10.254"),
    ("none", "definitely not a credential"),
];

fn bench_classify(c: &mut Criterion) {
    let classifier = CredentialClassifier::for_region("US").unwrap();
    let mut group = c.benchmark_group("classify");

    for (name, input) in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| classifier.classify(black_box(input)));
        });
    }

    group.finish();
}

fn bench_phone_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize_phone");

    for (code, input) in [("US", "415 555 0100"), ("GB", "07911 123456"), ("DE", "030 1234567")] {
        let default_region = region(code);
        group.bench_with_input(BenchmarkId::from_parameter(code), input, |b, input| {
            b.iter(|| canonicalize_phone(black_box(input), default_region));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let classifier = CredentialClassifier::for_region("US").unwrap();
    let batch: Vec<&str> = INPUTS.iter().map(|(_, input)| *input).cycle().take(1000).collect();

    c.bench_function("classify_batch_1000", |b| {
        b.iter(|| {
            batch
                .iter()
                .filter(|input| classifier.classify(black_box(input)).is_some())
                .count()
        });
    });
}

criterion_group!(benches, bench_classify, bench_phone_regions, bench_batch);
criterion_main!(benches);
