// Criterion benchmarks for quill-en.
//
// Everything runs against an inline lexicon so no external table files are
// needed.
//
// Run:
//   cargo bench -p quill-en --features handle

use criterion::{Criterion, criterion_group, criterion_main};

use quill_core::distance::levenshtein;
use quill_en::handle::CheckerHandle;
use quill_en::lexicon::Lexicon;
use quill_en::suggestion::{RankerOptions, rank};

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

/// Build a lexicon of a few hundred synthetic entries plus the words the
/// benchmark sentences need.
fn build_lexicon() -> Lexicon {
    let mut word_freq = hashbrown::HashMap::new();
    for (word, count) in [
        ("bitcoin", 40u64),
        ("year", 25),
        ("market", 12),
        ("receive", 10),
        ("relieve", 3),
        ("she", 8),
        ("rise", 6),
        ("move", 6),
        ("go", 6),
        ("not", 20),
    ] {
        word_freq.insert(word.to_string(), count);
    }
    // Synthetic filler so the ranker scan has something to chew on.
    for i in 0..400u32 {
        word_freq.insert(format!("word{i:03}"), u64::from(i % 17));
    }
    Lexicon::from_parts(word_freq, hashbrown::HashMap::new(), hashbrown::HashMap::new())
        .expect("non-empty word_freq")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein recieve/receive", |b| {
        b.iter(|| levenshtein(std::hint::black_box("recieve"), std::hint::black_box("receive")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let lexicon = build_lexicon();
    let options = RankerOptions::default();
    c.bench_function("rank recieve over ~410 entries", |b| {
        b.iter(|| rank(std::hint::black_box("recieve"), &lexicon, &options))
    });
}

fn bench_check(c: &mut Criterion) {
    let handle = CheckerHandle::new(build_lexicon());
    let texts = [
        "Bitcoin is rise this year",
        "She has go to the market",
        "62% of Bitcoin has not move in a year",
        "she did recieve it",
    ];
    c.bench_function("check four sentences", |b| {
        b.iter(|| {
            for text in texts {
                std::hint::black_box(handle.check(text));
            }
        })
    });
}

criterion_group!(benches, bench_levenshtein, bench_rank, bench_check);
criterion_main!(benches);
