//! Matcher for typed values that serialize to JSON text

use crate::base::{MatcherBase, MismatchKind, Verb};
use jsonmatch_codec::{Adapter, Codec, JsonCodec, JsonType};
use jsonmatch_core::{MatchResult, Matcher, Not, equal_to, not};
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

/// Matches values of `T` whose JSON text satisfies a sub-matcher
///
/// Without a sub-matcher, any value the codec can serialize matches. The only
/// failures before the sub-matcher are adapter resolution and serde errors
/// while writing.
pub struct SerializeMatcher<T, C = JsonCodec> {
    base: MatcherBase<String, C>,
    _target: PhantomData<fn(&T)>,
}

impl<T: JsonType> SerializeMatcher<T> {
    /// Create a matcher using a default-configured codec
    pub fn new() -> Self {
        Self {
            base: MatcherBase::new(
                Verb::Serialize,
                T::type_name(),
                Arc::new(JsonCodec::new()),
            ),
            _target: PhantomData,
        }
    }
}

impl<T: JsonType> Default for SerializeMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonType, C: Codec> SerializeMatcher<T, C> {
    /// Use the given codec instead of the default one
    pub fn with_codec<C2: Codec>(self, codec: Arc<C2>) -> SerializeMatcher<T, C2> {
        SerializeMatcher {
            base: self.base.with_codec(codec),
            _target: PhantomData,
        }
    }

    /// Check the serialized text with `matcher`
    pub fn matching<M: Matcher<String> + 'static>(self, matcher: M) -> Self {
        Self {
            base: self.base.with_sub_matcher(matcher),
            _target: PhantomData,
        }
    }

    /// Require the serialized text to equal `expected` exactly
    pub fn equal_to_text(self, expected: impl Into<String>) -> Self {
        self.matching(equal_to(expected.into()))
    }

    /// Apply the matcher to a value
    pub fn evaluate(&self, actual: &T) -> MatchResult {
        match self.convert(actual) {
            Ok(text) => self.base.verify(&text),
            Err(kind) => {
                tracing::debug!(type_name = %self.base.type_name(), reason = %kind, "serialize mismatch");
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

    fn convert(&self, actual: &T) -> Result<String, MismatchKind> {
        let adapter = self.base.retrieve_adapter::<T>()?;
        adapter
            .to_json(actual)
            .map_err(|err| MismatchKind::Serialization(err.to_string()))
    }
}

impl<T: JsonType, C: Codec> Matcher<T> for SerializeMatcher<T, C> {
    fn matches(&self, actual: &T) -> MatchResult {
        self.evaluate(actual)
    }

    fn description(&self) -> String {
        self.base.description()
    }

    fn negated_description(&self) -> String {
        self.base.negated_description()
    }
}

impl<T, C> std::ops::Not for SerializeMatcher<T, C> {
    type Output = Not<Self>;

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<T, C> Debug for SerializeMatcher<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SerializeMatcher").field(&self.base).finish()
    }
}

/// Match any value of `T` the codec can serialize
pub fn serializes_to<T: JsonType>() -> SerializeMatcher<T> {
    SerializeMatcher::new()
}

/// Match values of `T` that serialize to exactly `expected`
pub fn serializes_to_text<T: JsonType>(expected: impl Into<String>) -> SerializeMatcher<T> {
    SerializeMatcher::new().equal_to_text(expected)
}

/// Match values of `T` whose serialized text satisfies `matcher`
pub fn serializes_matching<T, M>(matcher: M) -> SerializeMatcher<T>
where
    T: JsonType,
    M: Matcher<String> + 'static,
{
    SerializeMatcher::new().matching(matcher)
}

#[cfg(test)]
#[path = "serialize/serialize_tests.rs"]
mod serialize_tests;
