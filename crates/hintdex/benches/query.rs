#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use hintdex::RegexIndex;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliett",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
];

/// Patterns shaped like log-scanning rules: a literal stem, some structure.
fn patterns(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let word = WORDS[i % WORDS.len()];
            match i % 4 {
                0 => format!(r"{word}-{i}\d+"),
                1 => format!(r"\b{word}_{i}[a-z]*"),
                2 => format!(r"(?i)code {i}: {word}"),
                _ => format!(r"{word}{i}(ok|fail)"),
            }
        })
        .collect()
}

fn text() -> String {
    "The quick brown fox reported code 17: Lima, then bravo-5123 and tango19ok; "
        .repeat(64)
}

fn build_index(patterns: &[String]) -> RegexIndex<usize> {
    let index = RegexIndex::new();
    for (i, pattern) in patterns.iter().enumerate() {
        index.enter(pattern, i).unwrap();
    }
    index.freeze().unwrap();
    index
}

#[divan::bench(args = [100, 1000])]
fn hint_index(
    bencher: Bencher,
    count: usize,
) {
    let text = text();
    let index = build_index(&patterns(count));
    index.query(&text).unwrap();

    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| index.query(black_box(&text)).unwrap().len());
}

#[divan::bench(args = [100, 1000])]
fn linear_scan(
    bencher: Bencher,
    count: usize,
) {
    let text = text();
    let regexes = patterns(count)
        .iter()
        .map(|p| regex::Regex::new(p).unwrap())
        .collect::<Vec<_>>();

    bencher.counter(BytesCount::new(text.len())).bench(|| {
        regexes
            .iter()
            .filter(|re| re.is_match(black_box(&text)))
            .count()
    });
}
