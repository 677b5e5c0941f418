//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from hintdex operations.
#[derive(Debug, thiserror::Error)]
pub enum HintdexError {
    /// Registration was attempted after the index was frozen by a query.
    #[error("enter() cannot be called after the index has been frozen by query()")]
    AlreadyFrozen,

    /// A registered pattern failed to compile on first use.
    #[error("failed to compile pattern {pattern:?}: {source}")]
    Compile {
        /// The pattern source which failed.
        pattern: String,

        /// The underlying regex engine error.
        #[source]
        source: ErrorWrapper,
    },

    /// The keyword set could not be built when the index was frozen.
    ///
    /// The index stays unusable; every later query reports the same reason.
    #[error("failed to build keyword set: {0}")]
    KeywordBuild(String),

    /// A compiled pattern failed while matching (a `fancy_regex` runtime limit).
    #[error("failed to match pattern {pattern:?}: {source}")]
    Match {
        /// The pattern source which failed.
        pattern: String,

        /// The underlying regex engine error.
        #[source]
        source: ErrorWrapper,
    },
}

/// Result type for hintdex operations.
pub type HDResult<T> = core::result::Result<T, HintdexError>;
