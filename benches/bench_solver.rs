use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_engine::{find_best_move, Board, Dictionary, Rack};
use std::convert::TryFrom;

const WORDS: &[&str] = &[
    "cat", "cats", "scat", "hat", "hats", "that", "chat", "rat", "rats", "tar", "tars", "star",
    "start", "art", "arts", "cart", "carts", "care", "cares", "scare", "race", "races", "trace",
    "traces", "crate", "crates", "react", "reacts", "eat", "eats", "east", "seat", "sat", "set",
    "sets", "rest", "rests", "tree", "trees", "steer", "reset", "ace", "aces", "case", "cases",
    "at", "as", "ah", "re", "es", "er", "ta", "st",
];

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    ".......C.......",
    "......CRATES...",
    ".......A.E.....",
    ".......T.A.....",
    ".......E.T.....",
    ".........S.....",
    "...............",
    "...............",
    "...............",
];

fn bench_find_best_move(c: &mut Criterion, name: &str, letters: &str) {
    let dict = Dictionary::from_words(WORDS);
    let board = Board::new().with_state_from_strings(TEST_STATE).unwrap();
    let rack = Rack::try_from(letters).unwrap();
    c.bench_function(&format!("find_best_move.{}", name), |b| {
        b.iter(|| find_best_move(&rack, &board, &dict))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_find_best_move(c, "plain", "SATIRES");
    bench_find_best_move(c, "blanks", "SATIR**");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(30);
    targets = criterion_benchmark
}
criterion_main!(benches);
