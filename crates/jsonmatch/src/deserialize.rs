//! Matcher for JSON text that deserializes to a typed value

use crate::base::{MatcherBase, MismatchKind, Verb};
use jsonmatch_codec::{Adapter, Codec, JsonCodec, JsonType};
use jsonmatch_core::{MatchResult, Matcher, Not, equal_to, not};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Possibly absent JSON text accepted by [`DeserializeMatcher`]
pub trait JsonText {
    /// Get the text, or `None` when absent
    fn as_json_text(&self) -> Option<&str>;
}

impl JsonText for str {
    fn as_json_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl JsonText for String {
    fn as_json_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl JsonText for Option<String> {
    fn as_json_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl JsonText for Option<&str> {
    fn as_json_text(&self) -> Option<&str> {
        *self
    }
}

/// Matches JSON text that deserializes to a non-null `T`
///
/// Conversion failures are classified and reported as mismatches:
/// absent text, adapter resolution failure, malformed or mistyped JSON
/// (including unknown fields), and the `null` literal. A converted value is
/// then checked by the sub-matcher, if one was given.
///
/// # Example
///
/// ```ignore
/// use jsonmatch::prelude::*;
///
/// assert_that(r#"{"key":"bar-123","count":50}"#, &deserializes_to::<Bar>());
/// assert_that(r#""a string""#, &deserializes_to_value("a string".to_string()));
/// ```
pub struct DeserializeMatcher<T, C = JsonCodec> {
    base: MatcherBase<T, C>,
}

impl<T: JsonType> DeserializeMatcher<T> {
    /// Create a matcher using a default-configured codec
    pub fn new() -> Self {
        Self {
            base: MatcherBase::new(
                Verb::Deserialize,
                T::type_name(),
                Arc::new(JsonCodec::new()),
            ),
        }
    }
}

impl<T: JsonType> Default for DeserializeMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonType, C: Codec> DeserializeMatcher<T, C> {
    /// Use the given codec instead of the default one
    pub fn with_codec<C2: Codec>(self, codec: Arc<C2>) -> DeserializeMatcher<T, C2> {
        DeserializeMatcher {
            base: self.base.with_codec(codec),
        }
    }

    /// Check the deserialized value with `matcher`
    pub fn matching<M: Matcher<T> + 'static>(self, matcher: M) -> Self {
        Self {
            base: self.base.with_sub_matcher(matcher),
        }
    }

    /// Require the deserialized value to equal `expected`
    pub fn equal_to(self, expected: T) -> Self
    where
        T: PartialEq + Debug,
    {
        self.matching(equal_to(expected))
    }

    /// Apply the matcher to possibly absent text
    pub fn evaluate(&self, actual: Option<&str>) -> MatchResult {
        match self.convert(actual) {
            Ok(value) => self.base.verify(&value),
            Err(kind) => {
                tracing::debug!(type_name = %self.base.type_name(), reason = %kind, "deserialize mismatch");
                kind.into()
            }
        }
    }

    /// Human-readable description of what the matcher accepts
    pub fn description(&self) -> String {
        self.base.description()
    }

    /// Human-readable description of what the negated matcher accepts
    pub fn negated_description(&self) -> String {
        self.base.negated_description()
    }

    fn convert(&self, actual: Option<&str>) -> Result<T, MismatchKind> {
        let text = actual.ok_or(MismatchKind::AbsentInput)?;
        let adapter = self.base.retrieve_adapter::<T>()?;
        adapter
            .from_json(text)
            .map_err(|err| MismatchKind::Malformed(err.to_string()))?
            .ok_or(MismatchKind::NullResult)
    }
}

impl<I, T, C> Matcher<I> for DeserializeMatcher<T, C>
where
    I: JsonText + ?Sized,
    T: JsonType,
    C: Codec,
{
    fn matches(&self, actual: &I) -> MatchResult {
        self.evaluate(actual.as_json_text())
    }

    fn description(&self) -> String {
        self.base.description()
    }

    fn negated_description(&self) -> String {
        self.base.negated_description()
    }
}

impl<T, C> std::ops::Not for DeserializeMatcher<T, C> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<T, C> Debug for DeserializeMatcher<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeserializeMatcher").field(&self.base).finish()
    }
}

/// Match text that deserializes to any non-null `T`
pub fn deserializes_to<T: JsonType>() -> DeserializeMatcher<T> {
    DeserializeMatcher::new()
}

/// Match text that deserializes to a value equal to `expected`
pub fn deserializes_to_value<T>(expected: T) -> DeserializeMatcher<T>
where
    T: JsonType + PartialEq + Debug,
{
    DeserializeMatcher::new().equal_to(expected)
}

/// Match text that deserializes to a value satisfying `matcher`
pub fn deserializes_matching<T, M>(matcher: M) -> DeserializeMatcher<T>
where
    T: JsonType,
    M: Matcher<T> + 'static,
{
    DeserializeMatcher::new().matching(matcher)
}

/// Match text that deserializes to any non-null `T`
#[deprecated(since = "0.1.0", note = "use `deserializes_to`")]
pub fn converts_to<T: JsonType>() -> DeserializeMatcher<T> {
    deserializes_to()
}

/// Match text that deserializes to a value equal to `expected`
#[deprecated(since = "0.1.0", note = "use `deserializes_to_value`")]
pub fn converts_to_value<T>(expected: T) -> DeserializeMatcher<T>
where
    T: JsonType + PartialEq + Debug,
{
    deserializes_to_value(expected)
}
