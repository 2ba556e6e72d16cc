use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shears::frequency;

const TEST_SIZES: &[(usize, &str)] = &[
    (1_000, "small"),
    (100_000, "medium"),
    (1_000_000, "large"),
];

fn generate_test_text(char_count: usize) -> String {
    let base_sentences = [
        "Hello world.",
        "This is a test sentence.",
        "How are you doing today?",
        "The quick brown fox jumps over the lazy dog.",
        "Rust is a systems programming language!",
        "Word frequencies follow a long-tailed distribution.",
        "Counting words is embarrassingly parallel.",
    ];

    let mut text = String::new();
    let mut sentence_idx = 0;

    while text.len() < char_count {
        text.push_str(base_sentences[sentence_idx % base_sentences.len()]);
        text.push(' ');
        sentence_idx += 1;
    }

    text.truncate(char_count);
    text
}

fn bench_sequential_vs_parallel_count(c: &mut Criterion) {
    for &(size, size_name) in TEST_SIZES {
        let test_text = generate_test_text(size);

        let mut group = c.benchmark_group(format!("word_count_{size_name}"));
        group.throughput(Throughput::Bytes(test_text.len() as u64));

        group.bench_function("sequential", |b| {
            b.iter(|| frequency::count(black_box(&test_text)))
        });

        group.bench_function("parallel", |b| {
            b.iter(|| frequency::count_parallel(black_box(&test_text)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_sequential_vs_parallel_count);
criterion_main!(benches);
