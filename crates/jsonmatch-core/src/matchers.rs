//! Basic value matchers

use crate::{MatchResult, Matcher, Not, not};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Matcher using `PartialEq` equality against an expected value
#[derive(Debug, Clone)]
pub struct EqualTo<V> {
    expected: V,
}

/// Match values equal to `expected`
pub fn equal_to<V: PartialEq + Debug>(expected: V) -> EqualTo<V> {
    EqualTo { expected }
}

impl<V: PartialEq + Debug> Matcher<V> for EqualTo<V> {
    fn matches(&self, actual: &V) -> MatchResult {
        if *actual == self.expected {
            MatchResult::Match
        } else {
            MatchResult::mismatch(format!("was {:?}", actual))
        }
    }

    fn description(&self) -> String {
        format!("is equal to {:?}", self.expected)
    }

    fn negated_description(&self) -> String {
        format!("is not equal to {:?}", self.expected)
    }
}

/// Matcher for strings containing a fixed substring
#[derive(Debug, Clone)]
pub struct ContainsSubstring {
    needle: String,
}

/// Match strings containing `needle`
pub fn contains_substring(needle: impl Into<String>) -> ContainsSubstring {
    ContainsSubstring {
        needle: needle.into(),
    }
}

impl Matcher<str> for ContainsSubstring {
    fn matches(&self, actual: &str) -> MatchResult {
        if actual.contains(&self.needle) {
            MatchResult::Match
        } else {
            MatchResult::mismatch(format!("was {:?}", actual))
        }
    }

    fn description(&self) -> String {
        format!("contains substring {:?}", self.needle)
    }
}

impl Matcher<String> for ContainsSubstring {
    fn matches(&self, actual: &String) -> MatchResult {
        Matcher::<str>::matches(self, actual)
    }

    fn description(&self) -> String {
        Matcher::<str>::description(self)
    }
}

/// Matcher for empty strings
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmptyString;

/// Match the empty string
pub fn is_empty_string() -> IsEmptyString {
    IsEmptyString
}

impl Matcher<str> for IsEmptyString {
    fn matches(&self, actual: &str) -> MatchResult {
        if actual.is_empty() {
            MatchResult::Match
        } else {
            MatchResult::mismatch(format!("was {:?}", actual))
        }
    }

    fn description(&self) -> String {
        "is empty string".to_string()
    }

    fn negated_description(&self) -> String {
        "is not empty string".to_string()
    }
}

impl Matcher<String> for IsEmptyString {
    fn matches(&self, actual: &String) -> MatchResult {
        Matcher::<str>::matches(self, actual)
    }

    fn description(&self) -> String {
        Matcher::<str>::description(self)
    }

    fn negated_description(&self) -> String {
        Matcher::<str>::negated_description(self)
    }
}

/// Matcher built from a named predicate function
#[derive(Clone)]
pub struct Predicate<F> {
    name: String,
    test: F,
}

/// Match values for which `test` returns true
///
/// `name` is used as the description, e.g. `"is positive"`.
pub fn predicate<T: ?Sized, F: Fn(&T) -> bool>(name: impl Into<String>, test: F) -> Predicate<F> {
    Predicate {
        name: name.into(),
        test,
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Matcher<T> for Predicate<F> {
    fn matches(&self, actual: &T) -> MatchResult {
        if (self.test)(actual) {
            MatchResult::Match
        } else {
            MatchResult::mismatch(format!("was not {}", self.name))
        }
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

/// Matcher applied to a projected property of a value
pub struct Has<T: ?Sized, U: ?Sized, P, M> {
    name: String,
    projection: P,
    matcher: M,
    _marker: PhantomData<fn(&T) -> &U>,
}

/// Match values whose property `name`, extracted by `projection`, satisfies `matcher`
///
/// # Example
///
/// ```ignore
/// let matcher = has("key", |bar: &Bar| &bar.key, contains_substring("bar-"));
/// ```
pub fn has<T, U, P, M>(name: impl Into<String>, projection: P, matcher: M) -> Has<T, U, P, M>
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T) -> &U,
    M: Matcher<U>,
{
    Has {
        name: name.into(),
        projection,
        matcher,
        _marker: PhantomData,
    }
}

impl<T, U, P, M> Matcher<T> for Has<T, U, P, M>
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T) -> &U,
    M: Matcher<U>,
{
    fn matches(&self, actual: &T) -> MatchResult {
        match self.matcher.matches((self.projection)(actual)) {
            MatchResult::Match => MatchResult::Match,
            MatchResult::Mismatch(reason) => {
                MatchResult::mismatch(format!("had {} that {}", self.name, reason))
            }
        }
    }

    fn description(&self) -> String {
        format!("has {} that {}", self.name, self.matcher.description())
    }
}

impl<V> std::ops::Not for EqualTo<V> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl std::ops::Not for ContainsSubstring {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl std::ops::Not for IsEmptyString {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<F> std::ops::Not for Predicate<F> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<T: ?Sized, U: ?Sized, P, M> std::ops::Not for Has<T, U, P, M> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}
