//! jsonmatch-core - Matcher trait, match results, and basic matchers
//!
//! This crate provides the assertion vocabulary the JSON matchers build on:
//! - [`Matcher`] trait pairing a verdict with a human-readable description
//! - [`MatchResult`] for the verdict itself
//! - [`Not`], [`AllOf`] and [`AnyOf`] for negation and composition
//! - Basic matchers such as [`equal_to`] and [`contains_substring`]
//! - [`assert_that`] and [`check_that`] for use inside tests

mod assertion;
mod matcher;
mod matchers;
mod result;

pub use assertion::{AssertionError, assert_that, check_that};
pub use matcher::{AllOf, AnyOf, Matcher, MatcherExt, Not, not};
pub use matchers::{
    ContainsSubstring, EqualTo, Has, IsEmptyString, Predicate, contains_substring, equal_to, has,
    is_empty_string, predicate,
};
pub use result::MatchResult;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        MatchResult, Matcher, MatcherExt, assert_that, check_that, contains_substring, equal_to,
        has, is_empty_string, not, predicate,
    };
}
