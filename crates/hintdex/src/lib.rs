//! # `hintdex` Hint-Indexed Regular Expressions
//!
//! Matching a large collection of regular expressions against a text
//! usually means running every one of them. `hintdex` avoids most of that
//! work: each registered pattern is reduced to a literal "hint", a substring
//! which every match of the pattern must contain. The hints of all patterns
//! go into one Aho-Corasick automaton; a query runs the automaton once, and
//! only runs the regexes whose hints were found. Patterns without a safe hint
//! (for instance, any top-level alternation) are always run.
//!
//! See:
//! * [`index`] for the [`RegexIndex`] itself.
//! * [`hints`] for hint extraction and selection.
//! * [`regex`] for pattern dialects and lazily compiled regexes.
//! * [`keywords`] for the multi-pattern keyword search.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use hintdex::{HintdexError, RegexIndex};
//!
//! let index = RegexIndex::new();
//! index.enter(r"error: \w+", "error")?;
//! index.enter(r"warn(ing)?", "warning")?;
//! index.enter(r"\d{3}-\d{4}", "phone")?;
//!
//! assert_eq!(index.query("error: disk full")?, vec![&"error"]);
//! assert_eq!(index.query("call 555-1234")?, vec![&"phone"]);
//!
//! // The first query froze the index.
//! assert!(matches!(index.enter("late", "late"), Err(HintdexError::AlreadyFrozen)));
//! # Ok::<(), HintdexError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod hints;
pub mod index;
pub mod keywords;
pub mod regex;

#[doc(inline)]
pub use errors::{HDResult, HintdexError};
#[doc(inline)]
pub use index::{RegexIndex, RegexIndexOptions};
