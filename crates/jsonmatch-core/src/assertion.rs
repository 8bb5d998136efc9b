//! Assertions for use inside tests

use crate::{MatchResult, Matcher};
use thiserror::Error;

/// A failed assertion, carrying the matcher description and mismatch reason
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected: {description}\nbut {reason}")]
pub struct AssertionError {
    /// What the matcher accepts
    pub description: String,
    /// Why the actual value was rejected
    pub reason: String,
}

/// Check a value against a matcher without panicking
pub fn check_that<T, M>(actual: &T, matcher: &M) -> Result<(), AssertionError>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    match matcher.matches(actual) {
        MatchResult::Match => Ok(()),
        MatchResult::Mismatch(reason) => Err(AssertionError {
            description: matcher.description(),
            reason,
        }),
    }
}

/// Assert that a value satisfies a matcher
///
/// # Panics
///
/// Panics with the matcher description and mismatch reason when the value is
/// rejected.
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(err) = check_that(actual, matcher) {
        panic!("{}", err);
    }
}

#[cfg(test)]
#[path = "assertion/assertion_tests.rs"]
mod assertion_tests;
