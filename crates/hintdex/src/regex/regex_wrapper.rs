//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::fmt::Debug;

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Which regex engine a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegexDialect {
    /// The `regex` crate.
    Basic,

    /// The `fancy_regex` crate.
    Fancy,

    /// Try the `regex` crate first, and fallback to `fancy_regex` if it fails.
    #[default]
    Adaptive,
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexWrapperPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexWrapperPattern {
    /// Label a pattern with the given dialect.
    pub fn with_dialect<S: Into<String>>(
        dialect: RegexDialect,
        pattern: S,
    ) -> Self {
        let pattern = pattern.into();
        match dialect {
            RegexDialect::Basic => Self::Basic(pattern),
            RegexDialect::Fancy => Self::Fancy(pattern),
            RegexDialect::Adaptive => Self::Adaptive(pattern),
        }
    }

    /// Get the dialect label.
    pub fn dialect(&self) -> RegexDialect {
        match self {
            Self::Basic(_) => RegexDialect::Basic,
            Self::Fancy(_) => RegexDialect::Fancy,
            Self::Adaptive(_) => RegexDialect::Adaptive,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => {
                regex::Regex::new(pattern)
                    .map(RegexWrapper::from)
                    .or_else(|_| {
                        fancy_regex::Regex::new(pattern)
                            .map(RegexWrapper::from)
                            .map_err(ErrorWrapper::from)
                    })
            }
        }
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `is_match`.
    ///
    /// `fancy_regex` can fail at match time (for example, when the
    /// backtrack limit is exceeded); `regex` never does.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// `true` if the regex matches anywhere in `haystack`.
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> Result<bool, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.is_match(haystack)),
            Self::Fancy(regex) => regex.is_match(haystack).map_err(ErrorWrapper::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_prefers_basic() {
        let pattern: RegexWrapperPattern = r"foo\d+".into();
        assert_eq!(pattern.dialect(), RegexDialect::Adaptive);

        let re = pattern.compile().unwrap();
        assert!(re.is_basic());
        assert_eq!(re.as_str(), r"foo\d+");
        assert!(re.is_match("xxfoo12").unwrap());
        assert!(!re.is_match("foo").unwrap());
    }

    #[test]
    fn test_adaptive_falls_up_to_fancy() {
        let pattern: RegexWrapperPattern = r"foo(?=bar)".into();
        let re = pattern.compile().unwrap();
        assert!(re.is_fancy());
        assert!(re.is_match("foobar").unwrap());
        assert!(!re.is_match("foobaz").unwrap());
    }

    #[test]
    fn test_basic_rejects_lookahead() {
        let pattern = RegexWrapperPattern::with_dialect(RegexDialect::Basic, r"foo(?=bar)");
        assert!(matches!(pattern.compile(), Err(ErrorWrapper::Basic(_))));

        let pattern = RegexWrapperPattern::with_dialect(RegexDialect::Fancy, r"foo(?=bar)");
        assert!(pattern.compile().unwrap().is_fancy());
    }

    #[test]
    fn test_malformed_pattern() {
        let pattern: RegexWrapperPattern = r"[invalid".into();
        let err = pattern.compile().unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
