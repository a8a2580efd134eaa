//! Benchmarks for the trie's word operations.
//! Compares insert, lookup and prefix queries across vocabulary sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexitrie::Trie;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1 << 10, 1 << 13, 1 << 16];

fn make_words(size: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let words = make_words(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                let trie = Trie::new();
                for word in words {
                    trie.insert(word);
                }
                black_box(trie.count())
            })
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for size in SIZES {
        let words = make_words(size);
        let trie: Trie = words.iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| words.iter().filter(|w| trie.contains(black_box(w))).count())
        });
    }
    group.finish();
}

fn bench_like(c: &mut Criterion) {
    let mut group = c.benchmark_group("like");
    for size in SIZES {
        let words = make_words(size);
        let trie: Trie = words.iter().collect();
        let prefixes: Vec<&str> = words.iter().take(256).map(|w| &w[..2]).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &prefixes, |b, prefixes| {
            b.iter(|| {
                for prefix in prefixes {
                    black_box(trie.like(prefix, 10));
                }
            })
        });
    }
    group.finish();
}

fn bench_remove_reinsert(c: &mut Criterion) {
    let words = make_words(1 << 13);
    let trie: Trie = words.iter().collect();
    c.bench_function("remove_reinsert", |b| {
        b.iter(|| {
            for word in words.iter().take(512) {
                trie.remove(word);
                trie.insert(word);
            }
        })
    });
}

criterion_group!(benches, bench_insert, bench_contains, bench_like, bench_remove_reinsert);
criterion_main!(benches);
