//! # Lazy Regex
//!
//! A [`LazyRegex`] holds a pattern and defers compiling it until the first
//! time it is asked to match; the compiled form is then kept for the life
//! of the value.
//!
//! Compilation happens outside the state lock. Two threads racing on an
//! uncompiled value may both compile the pattern; the first to store its
//! result wins, and the other result is dropped. This costs a redundant
//! compile at worst, and never changes a match result.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    errors::{HDResult, HintdexError},
    regex::{RegexWrapper, RegexWrapperPattern},
};

/// Compilation state of a [`LazyRegex`].
#[derive(Debug, Clone)]
enum LazyState {
    /// Not yet compiled.
    Uncompiled,

    /// Compiled; permanent once set.
    Compiled(Arc<RegexWrapper>),
}

/// A regex which compiles on first use.
#[derive(Debug)]
pub struct LazyRegex {
    pattern: RegexWrapperPattern,
    state: RwLock<LazyState>,
}

impl LazyRegex {
    /// Create a new uncompiled regex.
    ///
    /// This never touches the regex engine; malformed patterns are reported
    /// by the first call to [`LazyRegex::is_match`].
    pub fn new<P: Into<RegexWrapperPattern>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
            state: RwLock::new(LazyState::Uncompiled),
        }
    }

    /// The labeled pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        &self.pattern
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Has this regex been compiled yet?
    pub fn is_compiled(&self) -> bool {
        matches!(*self.state.read(), LazyState::Compiled(_))
    }

    /// Get the compiled regex, compiling it if this is the first use.
    ///
    /// ## Returns
    /// The shared compiled regex, or [`HintdexError::Compile`].
    pub fn compiled(&self) -> HDResult<Arc<RegexWrapper>> {
        if let LazyState::Compiled(regex) = &*self.state.read() {
            return Ok(regex.clone());
        }

        let regex = match self.pattern.compile() {
            Ok(regex) => Arc::new(regex),
            Err(source) => {
                log::warn!("failed to compile pattern {:?}: {}", self.as_str(), source);
                return Err(HintdexError::Compile {
                    pattern: self.as_str().to_string(),
                    source,
                });
            }
        };

        let mut state = self.state.write();
        match &*state {
            LazyState::Compiled(winner) => Ok(winner.clone()),
            LazyState::Uncompiled => {
                log::trace!("compiled pattern {:?}", self.as_str());
                *state = LazyState::Compiled(regex.clone());
                Ok(regex)
            }
        }
    }

    /// Does this regex match anywhere in `text`?
    ///
    /// ## Arguments
    /// * `text` - The haystack.
    ///
    /// ## Returns
    /// The match result, or the compile/match error of the pattern.
    pub fn is_match(
        &self,
        text: &str,
    ) -> HDResult<bool> {
        self.compiled()?
            .is_match(text)
            .map_err(|source| HintdexError::Match {
                pattern: self.as_str().to_string(),
                source,
            })
    }
}

impl Clone for LazyRegex {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            state: RwLock::new(self.state.read().clone()),
        }
    }
}
