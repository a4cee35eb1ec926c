// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for review session operations.
//!
//! Measures the performance of:
//! - Loading the embedded deck library
//! - Navigation operations (next/previous)
//! - A full judge-every-card run through a deck

use criterion::{criterion_group, criterion_main, Criterion};
use flipdeck::decks::{Card, DeckLibrary};
use flipdeck::review::{ReviewSession, SwipeDirection};
use std::hint::black_box;

/// Build a synthetic deck large enough to make per-card costs visible.
fn synthetic_deck(len: usize) -> Vec<Card> {
    (0..len)
        .map(|i| Card::new(format!("front {i}"), format!("back {i}")))
        .collect()
}

/// Benchmark deck library loading.
///
/// Measures parsing all embedded TOML sets into memory.
fn bench_load_library(c: &mut Criterion) {
    let mut group = c.benchmark_group("review_session");

    group.bench_function("load_library", |b| {
        b.iter(|| {
            let library = DeckLibrary::load().unwrap();
            black_box(&library);
        });
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous).
///
/// Measures the pure navigation time without any view work.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("review_session");

    let deck = synthetic_deck(500);
    let session = ReviewSession::open(deck, 250).unwrap();

    group.bench_function("next", |b| {
        b.iter(|| {
            let mut s = session.clone();
            s.next();
            black_box(&s);
        });
    });

    group.bench_function("prev", |b| {
        b.iter(|| {
            let mut s = session.clone();
            s.prev();
            black_box(&s);
        });
    });

    group.bench_function("snapshot", |b| {
        b.iter(|| {
            black_box(session.snapshot());
        });
    });

    group.finish();
}

/// Benchmark a full run: judge every card in a deck once.
fn bench_judge_full_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("review_session");

    let deck = synthetic_deck(500);

    group.bench_function("judge_full_deck", |b| {
        b.iter(|| {
            let mut session = ReviewSession::open(deck.clone(), 0).unwrap();
            for i in 0..deck.len() {
                let direction = if i % 2 == 0 {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                };
                session.judge_and_advance(direction);
            }
            black_box(&session);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_load_library,
    bench_navigate,
    bench_judge_full_deck
);
criterion_main!(benches);
