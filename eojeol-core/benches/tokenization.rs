//! Performance benchmarks for the tokenizers
//!
//! Run with: cargo bench --bench tokenization

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eojeol_core::{MaxLrScoreTokenizer, MaxScoreTokenizer, Tokenizer};
use std::collections::HashMap;
use std::hint::black_box;

fn score_map() -> HashMap<String, f64> {
    HashMap::from([
        ("파스".to_string(), 0.65),
        ("파스타".to_string(), 0.7),
        ("좋아".to_string(), 0.3),
        ("아이".to_string(), 0.6),
        ("데이터".to_string(), 0.55),
        ("분석".to_string(), 0.45),
    ])
}

/// Generate a line of repeated eojeols of the given character count
fn generate_line(chars: usize) -> String {
    let base = "파스타가좋아요 데이터분석을 아이오아이 ";
    let base_chars = base.chars().count();
    let text: String = base.repeat(chars / base_chars + 1);
    text.chars().take(chars).collect()
}

fn bench_max_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_score");
    let tokenizer = MaxScoreTokenizer::new(score_map()).unwrap();

    for size in [64, 512, 4096] {
        let line = generate_line(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", size), &line, |b, line| {
            b.iter(|| tokenizer.tokenize(black_box(line)));
        });
    }

    group.finish();
}

fn bench_lr(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr");
    let tokenizer = MaxLrScoreTokenizer::builder()
        .left_scores(score_map())
        .right_scores(HashMap::from([
            ("가".to_string(), 0.4),
            ("요".to_string(), 0.35),
            ("을".to_string(), 0.3),
        ]))
        .build()
        .unwrap();

    for size in [64, 512, 4096] {
        let line = generate_line(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", size), &line, |b, line| {
            b.iter(|| tokenizer.tokenize(black_box(line)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_max_score, bench_lr);
criterion_main!(benches);
