//! # Literal Hints
//!
//! A hint is a literal substring which occurs in every string a regex can match.
//!
//! * [`extract_hints`] - scan a regex source for its hints.
//! * [`select_hint`] - pick the best (longest) of them.
//! * [`best_hint`] - both, in one step.

pub mod hint_extractor;
pub mod hint_selector;

#[doc(inline)]
pub use hint_extractor::extract_hints;
#[doc(inline)]
pub use hint_selector::select_hint;

/// Extract and select the best hint of a regex source.
///
/// ## Arguments
/// * `pattern` - The regex source.
///
/// ## Returns
/// The longest hint, or `None` when no safe hint exists.
pub fn best_hint(pattern: &str) -> Option<String> {
    select_hint(&extract_hints(pattern)).map(str::to_string)
}
