//! # Regex Utilities
//!
//! Registered patterns may target either the standard [`regex`] crate, or the extended
//! machinery of the [`fancy_regex`] crate (look-around, back-references); the latter
//! has performance costs, so we prefer [`regex`] when a pattern permits it.
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Deferring Compilation - [`LazyRegex`]

pub mod lazy_regex;
pub mod regex_wrapper;

#[doc(inline)]
pub use lazy_regex::LazyRegex;
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexDialect, RegexWrapper, RegexWrapperPattern};
