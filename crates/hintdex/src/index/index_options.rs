//! Regex Index Options
//!
//! Options for building a [`RegexIndex`](crate::index::RegexIndex).

use crate::regex::RegexDialect;

/// Options for configuring a [`RegexIndex`](crate::index::RegexIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexIndexOptions {
    /// The dialect used for plain string patterns.
    ///
    /// Patterns entered as an explicit [`crate::regex::RegexWrapperPattern`]
    /// keep their own label.
    pub dialect: RegexDialect,

    /// Should hints be used at all?
    ///
    /// When disabled, every pattern is checked against every text; results
    /// are the same, only slower.
    pub use_hints: bool,
}

impl Default for RegexIndexOptions {
    fn default() -> Self {
        Self {
            dialect: RegexDialect::default(),
            use_hints: true,
        }
    }
}

impl RegexIndexOptions {
    /// Gets the configured dialect.
    pub fn dialect(&self) -> RegexDialect {
        self.dialect
    }

    /// Sets the configured dialect.
    pub fn set_dialect(
        &mut self,
        dialect: RegexDialect,
    ) {
        self.dialect = dialect;
    }

    /// Sets the configured dialect.
    pub fn with_dialect(
        mut self,
        dialect: RegexDialect,
    ) -> Self {
        self.set_dialect(dialect);
        self
    }

    /// Gets the configured hint usage.
    pub fn use_hints(&self) -> bool {
        self.use_hints
    }

    /// Sets the configured hint usage.
    pub fn set_use_hints(
        &mut self,
        use_hints: bool,
    ) {
        self.use_hints = use_hints;
    }

    /// Sets the configured hint usage.
    pub fn with_use_hints(
        mut self,
        use_hints: bool,
    ) -> Self {
        self.set_use_hints(use_hints);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        let options = RegexIndexOptions::default();
        assert_eq!(options.dialect(), RegexDialect::Adaptive);
        assert!(options.use_hints());

        let options = options
            .with_dialect(RegexDialect::Fancy)
            .with_use_hints(false);
        assert_eq!(options.dialect(), RegexDialect::Fancy);
        assert!(!options.use_hints());
    }
}
