use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vigenere_analysis::keylength::find_repeats;
use vigenere_analysis::{AnalysisConfig, Analyzer};

fn random_ciphertext(length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..length)
        .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
        .collect()
}

fn bench_find_repeats(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_repeats");

    for length in [300, 3_000, 15_000] {
        let text = random_ciphertext(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &text, |b, text| {
            b.iter(|| find_repeats(text, 3));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();

    for key_length in [3, 7, 16] {
        let text = random_ciphertext(3_000);
        group.bench_with_input(BenchmarkId::from_parameter(key_length), &text, |b, text| {
            b.iter(|| analyzer.analyze(text, key_length));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_repeats, bench_analyze);
criterion_main!(benches);
