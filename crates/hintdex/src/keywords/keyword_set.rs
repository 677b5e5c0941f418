//! # Keyword Set Traits
//!
//! A keyword set maps literal keywords to payloads, and finds every payload
//! whose keyword occurs in a haystack. It is built in two phases: a
//! [`KeywordSetBuilder`] accepts insertions, and is consumed by
//! [`KeywordSetBuilder::freeze`] into a read-only [`KeywordSet`].

use crate::errors::HDResult;

/// The mutable, pre-freeze phase of a keyword set.
pub trait KeywordSetBuilder<P>: Send {
    /// The frozen set type.
    type Frozen: KeywordSet<P>;

    /// Add a keyword/payload pair.
    ///
    /// A keyword may be inserted more than once; each payload is kept.
    fn insert(
        &mut self,
        keyword: &str,
        payload: P,
    );

    /// The number of payloads inserted.
    fn len(&self) -> usize;

    /// Is the builder empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the search structure.
    ///
    /// ## Returns
    /// The frozen set, or [`crate::HintdexError::KeywordBuild`].
    fn freeze(self) -> HDResult<Self::Frozen>;
}

/// The frozen, searchable phase of a keyword set.
pub trait KeywordSet<P>: Send + Sync {
    /// Find the payloads of every keyword occurring in `haystack`.
    ///
    /// Each payload is reported at most once per search.
    fn search<'a>(
        &'a self,
        haystack: &str,
    ) -> Vec<&'a P>;

    /// The number of payloads held.
    fn len(&self) -> usize;

    /// Is the set empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
