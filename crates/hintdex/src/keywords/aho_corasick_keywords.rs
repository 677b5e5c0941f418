//! # Aho-Corasick Keyword Set
//!
//! Distinct keywords become the patterns of one [`AhoCorasick`] automaton;
//! repeated keywords share a pattern slot, which holds every payload inserted
//! under that keyword, in insertion order.

use aho_corasick::AhoCorasick;
use ahash::AHashMap;

use crate::{
    errors::{HDResult, HintdexError},
    keywords::{KeywordSet, KeywordSetBuilder},
};

/// Builder for [`AhoCorasickKeywords`].
#[derive(Debug, Clone)]
pub struct AhoCorasickKeywordsBuilder<P> {
    slots: AHashMap<String, usize>,
    keywords: Vec<String>,
    payloads: Vec<Vec<P>>,
    len: usize,
}

impl<P> Default for AhoCorasickKeywordsBuilder<P> {
    fn default() -> Self {
        Self {
            slots: AHashMap::new(),
            keywords: Vec::new(),
            payloads: Vec::new(),
            len: 0,
        }
    }
}

impl<P> AhoCorasickKeywordsBuilder<P> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl<P: Send + Sync> KeywordSetBuilder<P> for AhoCorasickKeywordsBuilder<P> {
    type Frozen = AhoCorasickKeywords<P>;

    fn insert(
        &mut self,
        keyword: &str,
        payload: P,
    ) {
        let slot = match self.slots.get(keyword) {
            Some(&slot) => slot,
            None => {
                let slot = self.keywords.len();
                self.slots.insert(keyword.to_string(), slot);
                self.keywords.push(keyword.to_string());
                self.payloads.push(Vec::new());
                slot
            }
        };
        self.payloads[slot].push(payload);
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    fn freeze(self) -> HDResult<AhoCorasickKeywords<P>> {
        let automaton = AhoCorasick::new(&self.keywords)
            .map_err(|err| HintdexError::KeywordBuild(err.to_string()))?;

        log::debug!(
            "built keyword automaton: {} keywords, {} payloads",
            self.keywords.len(),
            self.len
        );

        Ok(AhoCorasickKeywords {
            automaton,
            payloads: self.payloads,
            len: self.len,
        })
    }
}

/// A frozen keyword set searched with an Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct AhoCorasickKeywords<P> {
    automaton: AhoCorasick,
    payloads: Vec<Vec<P>>,
    len: usize,
}

impl<P: Send + Sync> KeywordSet<P> for AhoCorasickKeywords<P> {
    /// Payloads are reported in the order their keywords are found
    /// (by match end), then in insertion order.
    fn search<'a>(
        &'a self,
        haystack: &str,
    ) -> Vec<&'a P> {
        let mut found = Vec::new();
        if self.payloads.is_empty() {
            return found;
        }

        let mut seen = vec![false; self.payloads.len()];
        let mut remaining = self.payloads.len();
        for m in self.automaton.find_overlapping_iter(haystack) {
            let slot = m.pattern().as_usize();
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            found.extend(self.payloads[slot].iter());

            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
        found
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(pairs: &[(&str, u32)]) -> AhoCorasickKeywords<u32> {
        let mut builder = AhoCorasickKeywordsBuilder::new();
        for (keyword, payload) in pairs {
            builder.insert(keyword, *payload);
        }
        builder.freeze().unwrap()
    }

    #[test]
    fn test_empty_set() {
        let set = build(&[]);
        assert!(set.is_empty());
        assert!(set.search("anything").is_empty());
    }

    #[test]
    fn test_finds_substrings() {
        let set = build(&[("cat", 1), ("dog", 2), ("bird", 3)]);
        assert_eq!(set.len(), 3);

        assert_eq!(set.search("a dog and a cat"), vec![&2, &1]);
        assert!(set.search("fish").is_empty());
    }

    #[test]
    fn test_overlapping_keywords() {
        let set = build(&[("cats", 1), ("cat", 2), ("ats", 3)]);

        let mut found = set.search("cats").into_iter().copied().collect::<Vec<_>>();
        found.sort();
        assert_eq!(found, vec![1, 2, 3]);
    }

    #[test]
    fn test_repeated_keyword_keeps_all_payloads() {
        let mut builder = AhoCorasickKeywordsBuilder::new();
        builder.insert("cat", 1);
        builder.insert("cat", 2);
        builder.insert("dog", 3);
        assert_eq!(builder.keyword_count(), 2);
        assert_eq!(builder.len(), 3);

        let set = builder.freeze().unwrap();
        assert_eq!(set.search("cat"), vec![&1, &2]);
    }

    #[test]
    fn test_payload_reported_once_per_search() {
        let set = build(&[("ab", 7)]);
        assert_eq!(set.search("ab ab ab"), vec![&7]);
    }
}
