//! # Regex Index
//!
//! * [`RegexIndex`] - the hint-filtered pattern set.
//! * [`RegexIndexOptions`] - its configuration.

pub mod index_options;
pub mod regex_index;

#[doc(inline)]
pub use index_options::RegexIndexOptions;
#[doc(inline)]
pub use regex_index::{IndexEntry, RegexIndex};
