// Criterion benchmarks for wordcheck-suggest.
//
// Run:
//   cargo bench -p wordcheck-suggest

use criterion::{Criterion, criterion_group, criterion_main};
use wordcheck_avl::BalancedSet;
use wordcheck_suggest::{SuggestionOptions, WordChecker};

/// Deterministic dictionary of short uppercase words.
fn dictionary(count: usize) -> BalancedSet<String> {
    let mut set = BalancedSet::new();
    let mut state: u32 = 0x2545_f491;
    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let len = 3 + (state % 5) as usize;
        let word: String = (0..len)
            .map(|i| (b'A' + ((state >> (i * 4)) % 26) as u8) as char)
            .collect();
        set.add(word);
    }
    set
}

fn bench_find_suggestions(c: &mut Criterion) {
    let mut words = dictionary(20_000);
    for w in ["CAT", "CAR", "CATS", "TO", "GO", "SPELLING"] {
        words.add(w.to_string());
    }
    let checker = WordChecker::new(&words);

    c.bench_function("find_suggestions_short", |b| {
        b.iter(|| checker.find_suggestions(std::hint::black_box("CAS")));
    });
    c.bench_function("find_suggestions_long", |b| {
        b.iter(|| checker.find_suggestions(std::hint::black_box("SPELLNIG")));
    });
    c.bench_function("find_suggestions_split", |b| {
        b.iter(|| checker.find_suggestions(std::hint::black_box("TOGO")));
    });

    let limited = WordChecker::with_options(
        &words,
        SuggestionOptions {
            max_suggestions: Some(1),
            ..SuggestionOptions::default()
        },
    );
    c.bench_function("find_suggestions_limit_1", |b| {
        b.iter(|| limited.find_suggestions(std::hint::black_box("CAS")));
    });
}

criterion_group!(benches, bench_find_suggestions);
criterion_main!(benches);
