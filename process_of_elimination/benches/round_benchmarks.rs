use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use process_of_elimination::{Round, functional::mask};
use std::{collections::BTreeSet, hint::black_box};

const PHRASES: [&str; 3] = [
    "network",
    "process of elimination",
    "the quick brown fox jumps over the lazy dog",
];

/// Benchmark deriving the display for phrases of increasing length
fn bench_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask");
    let guessed: BTreeSet<char> = "aeiou".chars().collect();

    for phrase in PHRASES {
        group.bench_with_input(BenchmarkId::from_parameter(phrase.len()), phrase, |b, p| {
            b.iter(|| mask(black_box(p), &guessed));
        });
    }

    group.finish();
}

/// Benchmark playing a full round to a win, one guess per distinct letter
fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_round");

    for phrase in PHRASES {
        group.bench_with_input(BenchmarkId::from_parameter(phrase.len()), phrase, |b, p| {
            b.iter(|| {
                let mut round = Round::start(p, 6).unwrap();
                for c in p.chars().filter(|c| c.is_alphabetic()) {
                    if round.status().is_terminal() {
                        break;
                    }
                    let _ = round.guess(c);
                }
                black_box(round.current_state())
            });
        });
    }

    group.finish();
}

/// Benchmark rejecting a guess after the round is over
fn bench_rejected_guess(c: &mut Criterion) {
    let mut round = Round::start("dog", 1).unwrap();
    round.guess('z').unwrap();

    c.bench_function("rejected_guess", |b| {
        b.iter(|| black_box(round.guess(black_box('d'))));
    });
}

criterion_group!(benches, bench_mask, bench_full_round, bench_rejected_guess);
criterion_main!(benches);
