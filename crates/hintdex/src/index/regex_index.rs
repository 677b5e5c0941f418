//! # Regex Index
//!
//! [`RegexIndex`] holds a collection of `(pattern, value)` registrations and
//! answers "which values' patterns match this text?" without running every
//! pattern against every text.
//!
//! Each pattern is reduced to its best literal hint (see [`crate::hints`]).
//! Hinted entries live in a keyword set keyed by the case-folded hint; a
//! query only confirms the entries whose hint occurs in the case-folded text.
//! Hintless entries are always confirmed. Confirmation runs the real regex
//! against the original text, so case folding only affects the pre-filter.
//!
//! ## Lifecycle
//!
//! The index starts out `Building`, accepting [`RegexIndex::enter`]. The first
//! [`RegexIndex::query`] (or [`RegexIndex::freeze`]) freezes it, once; after
//! that, `enter` fails with [`HintdexError::AlreadyFrozen`], and queries read
//! the frozen structure without taking the lock.

use core::mem;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::{
    errors::{HDResult, HintdexError},
    hints::best_hint,
    index::RegexIndexOptions,
    keywords::{AhoCorasickKeywordsBuilder, KeywordSet, KeywordSetBuilder, fold_case},
    regex::{LazyRegex, RegexWrapperPattern},
};

/// A registered pattern and its associated value.
#[derive(Debug)]
pub struct IndexEntry<V> {
    matcher: LazyRegex,
    hint: Option<String>,
    value: V,
}

impl<V> IndexEntry<V> {
    /// The registered pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        self.matcher.pattern()
    }

    /// The selected hint, if the entry has one.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The associated value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Run the entry's regex against `text`.
    pub fn is_match(
        &self,
        text: &str,
    ) -> HDResult<bool> {
        self.matcher.is_match(text)
    }
}

/// Registrations collected before the freeze.
struct IndexBuilder<V, B> {
    keywords: B,
    hintless: Vec<IndexEntry<V>>,
}

impl<V, B> IndexBuilder<V, B>
where
    B: KeywordSetBuilder<IndexEntry<V>>,
{
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn freeze(self) -> HDResult<FrozenIndex<V, B::Frozen>> {
        log::debug!(
            "freezing regex index: {} hinted, {} hintless",
            self.keywords.len(),
            self.hintless.len()
        );
        Ok(FrozenIndex {
            keywords: self.keywords.freeze()?,
            hintless: self.hintless,
        })
    }
}

/// The read-only query structure.
struct FrozenIndex<V, K> {
    keywords: K,
    hintless: Vec<IndexEntry<V>>,
}

/// The index lifecycle; every transition is one way.
///
/// Under the lock, `Frozen` holds exactly when the `OnceLock` is set.
enum Lifecycle<V, B> {
    /// Accepting registrations.
    Building(IndexBuilder<V, B>),

    /// Serving queries; the frozen structure lives in the index's `OnceLock`.
    Frozen,

    /// The freeze did not complete; the registrations are gone.
    Failed(String),
}

/// Held while the keyword set is built; left behind if the build panics.
const FREEZE_INCOMPLETE: &str = "keyword set build did not complete";

/// A hint-filtered set of regular expressions, each with an associated value.
///
/// ## Example
/// ```rust
/// use hintdex::RegexIndex;
///
/// let index = RegexIndex::new();
/// index.enter(r"cat", 1)?;
/// index.enter(r"d[aeiou]g", 2)?;
/// index.enter(r"a|b", 3)?;
///
/// assert_eq!(index.query("my cat")?, vec![&3, &1]);
/// # Ok::<(), hintdex::HintdexError>(())
/// ```
pub struct RegexIndex<V, B = AhoCorasickKeywordsBuilder<IndexEntry<V>>>
where
    B: KeywordSetBuilder<IndexEntry<V>>,
{
    options: RegexIndexOptions,
    lifecycle: Mutex<Lifecycle<V, B>>,
    frozen: OnceLock<FrozenIndex<V, B::Frozen>>,
}

impl<V> Default for RegexIndex<V>
where
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RegexIndex<V>
where
    V: Send + Sync,
{
    /// Create a new empty index with default options.
    pub fn new() -> Self {
        Self::with_options(RegexIndexOptions::default())
    }

    /// Create a new empty index.
    ///
    /// ## Arguments
    /// * `options` - The index options.
    pub fn with_options(options: RegexIndexOptions) -> Self {
        Self::with_keyword_builder(AhoCorasickKeywordsBuilder::new(), options)
    }
}

impl<V, B> RegexIndex<V, B>
where
    V: Send + Sync,
    B: KeywordSetBuilder<IndexEntry<V>>,
{
    /// Create a new empty index over a custom keyword set.
    ///
    /// ## Arguments
    /// * `keywords` - An empty keyword set builder.
    /// * `options` - The index options.
    pub fn with_keyword_builder(
        keywords: B,
        options: RegexIndexOptions,
    ) -> Self {
        Self {
            options,
            lifecycle: Mutex::new(Lifecycle::Building(IndexBuilder {
                keywords,
                hintless: Vec::new(),
            })),
            frozen: OnceLock::new(),
        }
    }

    /// The index options.
    pub fn options(&self) -> &RegexIndexOptions {
        &self.options
    }

    /// Has the index stopped accepting registrations?
    ///
    /// This is also true when the freeze failed.
    pub fn is_frozen(&self) -> bool {
        !matches!(*self.lifecycle.lock(), Lifecycle::Building(_))
    }

    /// The number of registrations with a hint.
    pub fn hinted_len(&self) -> usize {
        self.lens().0
    }

    /// The number of registrations without a hint.
    pub fn hintless_len(&self) -> usize {
        self.lens().1
    }

    fn lens(&self) -> (usize, usize) {
        if self.frozen.get().is_none()
            && let Lifecycle::Building(builder) = &*self.lifecycle.lock()
        {
            return (builder.keywords.len(), builder.hintless.len());
        }
        self.frozen
            .get()
            .map_or((0, 0), |frozen| (frozen.keywords.len(), frozen.hintless.len()))
    }

    /// The total number of registrations.
    pub fn len(&self) -> usize {
        let (hinted, hintless) = self.lens();
        hinted + hintless
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a pattern, in the configured dialect.
    ///
    /// ## Arguments
    /// * `pattern` - The regex source; it is not compiled until first queried.
    /// * `value` - The value to report when `pattern` matches.
    ///
    /// ## Returns
    /// [`HintdexError::AlreadyFrozen`] if the index has been queried.
    pub fn enter(
        &self,
        pattern: &str,
        value: V,
    ) -> HDResult<()> {
        self.enter_pattern(
            RegexWrapperPattern::with_dialect(self.options.dialect, pattern),
            value,
        )
    }

    /// Register a labeled pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The labeled regex; it is not compiled until first queried.
    /// * `value` - The value to report when `pattern` matches.
    ///
    /// ## Returns
    /// [`HintdexError::AlreadyFrozen`] if the index has been queried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, value)))]
    pub fn enter_pattern(
        &self,
        pattern: RegexWrapperPattern,
        value: V,
    ) -> HDResult<()> {
        let mut lifecycle = self.lifecycle.lock();
        let Lifecycle::Building(builder) = &mut *lifecycle else {
            return Err(HintdexError::AlreadyFrozen);
        };

        let hint = if self.options.use_hints {
            best_hint(pattern.as_str())
        } else {
            None
        };

        match hint {
            Some(hint) => {
                log::trace!("entered {:?} with hint {:?}", pattern.as_str(), hint);
                let keyword = fold_case(&hint);
                builder.keywords.insert(
                    &keyword,
                    IndexEntry {
                        matcher: LazyRegex::new(pattern),
                        hint: Some(hint),
                        value,
                    },
                );
            }
            None => {
                log::trace!("entered {:?} without a hint", pattern.as_str());
                builder.hintless.push(IndexEntry {
                    matcher: LazyRegex::new(pattern),
                    hint: None,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Freeze the index, if it is not already frozen.
    ///
    /// [`RegexIndex::query`] does this implicitly.
    ///
    /// ## Returns
    /// [`HintdexError::KeywordBuild`] if the keyword set could not be built.
    pub fn freeze(&self) -> HDResult<()> {
        self.frozen_index().map(|_| ())
    }

    fn frozen_index(&self) -> HDResult<&FrozenIndex<V, B::Frozen>> {
        if let Some(frozen) = self.frozen.get() {
            return Ok(frozen);
        }

        let mut lifecycle = self.lifecycle.lock();
        if let Some(frozen) = self.frozen.get() {
            return Ok(frozen);
        }

        match mem::replace(
            &mut *lifecycle,
            Lifecycle::Failed(FREEZE_INCOMPLETE.to_string()),
        ) {
            Lifecycle::Building(builder) => match builder.freeze() {
                Ok(frozen) => {
                    let frozen = self.frozen.get_or_init(|| frozen);
                    *lifecycle = Lifecycle::Frozen;
                    Ok(frozen)
                }
                Err(err) => {
                    log::warn!("regex index freeze failed: {err}");
                    *lifecycle = Lifecycle::Failed(err.to_string());
                    Err(err)
                }
            },
            Lifecycle::Failed(reason) => {
                *lifecycle = Lifecycle::Failed(reason.clone());
                Err(HintdexError::KeywordBuild(reason))
            }
            Lifecycle::Frozen => unreachable!("frozen lifecycle without a frozen index"),
        }
    }

    /// Find the values of every pattern which matches `text`.
    ///
    /// Freezes the index on first call.
    ///
    /// ## Arguments
    /// * `text` - The text to match.
    ///
    /// ## Returns
    /// The matching values; hintless entries first, in registration order,
    /// then the hinted entries in keyword search order. A pattern which
    /// fails to compile (or to match) fails the whole query.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn query(
        &self,
        text: &str,
    ) -> HDResult<Vec<&V>> {
        let frozen = self.frozen_index()?;
        let folded = fold_case(text);

        let mut found = Vec::new();
        for entry in frozen
            .hintless
            .iter()
            .chain(frozen.keywords.search(&folded))
        {
            if entry.is_match(text)? {
                found.push(&entry.value);
            }
        }
        Ok(found)
    }

    /// Query a batch of texts.
    ///
    /// ## Returns
    /// One result list per text, or the first error.
    pub fn query_batch(
        &self,
        batch: &[&str],
    ) -> HDResult<Vec<Vec<&V>>> {
        batch.iter().map(|text| self.query(text)).collect()
    }

    /// Query a batch of texts in parallel.
    ///
    /// ## Returns
    /// One result list per text, or the first error.
    #[cfg(feature = "rayon")]
    pub fn par_query_batch(
        &self,
        batch: &[&str],
    ) -> HDResult<Vec<Vec<&V>>> {
        use rayon::prelude::*;

        self.freeze()?;
        batch.par_iter().map(|text| self.query(text)).collect()
    }
}
