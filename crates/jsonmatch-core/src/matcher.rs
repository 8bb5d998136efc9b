//! Matcher trait, negation, and composition

use crate::MatchResult;

/// A predicate over values of type `T` that can describe itself
///
/// Matchers are immutable once constructed. Applying the same matcher to the
/// same value always yields the same [`MatchResult`].
pub trait Matcher<T: ?Sized> {
    /// Apply the matcher to a value
    fn matches(&self, actual: &T) -> MatchResult;

    /// Human-readable description of what the matcher accepts
    fn description(&self) -> String;

    /// Human-readable description of what the negated matcher accepts
    fn negated_description(&self) -> String {
        format!("not {}", self.description())
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn negated_description(&self) -> String {
        (**self).negated_description()
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn negated_description(&self) -> String {
        (**self).negated_description()
    }
}

/// Matcher that inverts another matcher
#[derive(Debug, Clone)]
pub struct Not<M>(M);

/// Negate a matcher
pub fn not<M>(matcher: M) -> Not<M> {
    Not(matcher)
}

impl<M> Not<M> {
    /// Get the negated matcher
    pub fn inner(&self) -> &M {
        &self.0
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        match self.0.matches(actual) {
            MatchResult::Match => {
                MatchResult::mismatch(format!("unexpectedly {}", self.0.description()))
            }
            MatchResult::Mismatch(_) => MatchResult::Match,
        }
    }

    fn description(&self) -> String {
        self.0.negated_description()
    }

    fn negated_description(&self) -> String {
        self.0.description()
    }
}

/// Negating a negation gives back the original matcher
impl<M> std::ops::Not for Not<M> {
    type Output = M;

    fn not(self) -> M {
        self.0
    }
}

/// Matcher that requires both inner matchers to match
#[derive(Debug, Clone)]
pub struct AllOf<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for AllOf<A, B> {
    fn matches(&self, actual: &T) -> MatchResult {
        match self.first.matches(actual) {
            MatchResult::Match => self.second.matches(actual),
            mismatch => mismatch,
        }
    }

    fn description(&self) -> String {
        format!("{} and {}", self.first.description(), self.second.description())
    }
}

/// Matcher that requires at least one inner matcher to match
#[derive(Debug, Clone)]
pub struct AnyOf<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for AnyOf<A, B> {
    fn matches(&self, actual: &T) -> MatchResult {
        let first = match self.first.matches(actual) {
            MatchResult::Match => return MatchResult::Match,
            MatchResult::Mismatch(reason) => reason,
        };
        match self.second.matches(actual) {
            MatchResult::Match => MatchResult::Match,
            MatchResult::Mismatch(second) => {
                MatchResult::mismatch(format!("{} and {}", first, second))
            }
        }
    }

    fn description(&self) -> String {
        format!("{} or {}", self.first.description(), self.second.description())
    }
}

impl<A, B> std::ops::Not for AllOf<A, B> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<A, B> std::ops::Not for AnyOf<A, B> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

/// Combinators available on every matcher
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// Match only when both `self` and `other` match
    fn and<M: Matcher<T>>(self, other: M) -> AllOf<Self, M> {
        AllOf {
            first: self,
            second: other,
        }
    }

    /// Match when either `self` or `other` matches
    fn or<M: Matcher<T>>(self, other: M) -> AnyOf<Self, M> {
        AnyOf {
            first: self,
            second: other,
        }
    }

    /// Erase the matcher type
    fn boxed(self) -> Box<dyn Matcher<T>>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}
