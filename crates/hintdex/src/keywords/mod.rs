//! # Keyword Sets
//!
//! The multi-pattern literal search used as a pre-filter by
//! [`crate::index::RegexIndex`].
//!
//! * [`KeywordSetBuilder`] / [`KeywordSet`] - the two-phase interface.
//! * [`AhoCorasickKeywordsBuilder`] / [`AhoCorasickKeywords`] - the default implementation.
//! * [`fold_case`] - the case folding applied to keywords and haystacks.

pub mod aho_corasick_keywords;
pub mod keyword_set;

#[doc(inline)]
pub use aho_corasick_keywords::{AhoCorasickKeywords, AhoCorasickKeywordsBuilder};
#[doc(inline)]
pub use keyword_set::{KeywordSet, KeywordSetBuilder};

/// Case-fold `text`, one char at a time.
///
/// Each char maps to the lower-case form of its single-char upper-case
/// form, so every member of a simple case-folding class (`s`, `S`, `ſ`;
/// `σ`, `ς`, `Σ`; `k`, `K`, `K`) folds to the same text. Chars whose
/// upper-case form is several chars are lower-cased directly.
///
/// There are no context-sensitive rules (such as the final sigma of
/// [`str::to_lowercase`]), so if `a` is a substring of `b`, then
/// `fold_case(a)` is a substring of `fold_case(b)`.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut folded);
    }
    folded
}

fn fold_char(
    c: char,
    out: &mut String,
) {
    // Folding classes which share no single-char upper-case form.
    let c = match c {
        '\u{1FD3}' => '\u{0390}',
        '\u{1FE3}' => '\u{03B0}',
        '\u{FB05}' => '\u{FB06}',
        c => c,
    };

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.extend(u.to_lowercase()),
        _ => out.extend(c.to_lowercase()),
    }
}
