use criterion::{Criterion, criterion_group, criterion_main};
use spellsuggest::{SuggestionRanker, Vocabulary, distance};
use std::hint::black_box;

const ALPHABET: &[u8] = b"etaoinshrdlucmfwyp";

/// Deterministic pseudo-words so the bench needs no dictionary file.
fn synthetic_vocabulary(size: usize) -> Vocabulary {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..size)
        .map(|_| {
            let len = 3 + (next() % 8) as usize;
            let word: String = (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect();
            (word, (next() % 1_000) as u32)
        })
        .collect()
}

fn bench_suggest_word(c: &mut Criterion) {
    let vocabulary = synthetic_vocabulary(20_000);
    let ranker = SuggestionRanker::new(&vocabulary);

    c.bench_function("distance_kitten_sitting", |b| {
        b.iter(|| distance(black_box("kitten"), black_box("sitting")))
    });

    c.bench_function("suggest_single_word", |b| {
        b.iter(|| ranker.suggest(black_box(Some("sntence"))))
    });
}

criterion_group!(benches, bench_suggest_word);
criterion_main!(benches);
