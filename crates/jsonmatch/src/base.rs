//! Description and verification policy shared by both conversion directions

use crate::name::normalize_type_name;
use jsonmatch_codec::{Adapter, Codec, JsonType};
use jsonmatch_core::{MatchResult, Matcher};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Conversion direction a matcher checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Typed value to JSON text
    Serialize,
    /// JSON text to typed value
    Deserialize,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Serialize => write!(f, "serialize"),
            Verb::Deserialize => write!(f, "deserialize"),
        }
    }
}

/// Why a conversion matcher rejected its input before reaching the sub-matcher
///
/// Every variant surfaces as a [`MatchResult::Mismatch`] whose reason is the
/// `Display` text. Sub-matcher mismatches are forwarded as-is and have no
/// variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// The input text was absent
    #[error("actual was null")]
    AbsentInput,

    /// The codec could not provide an adapter for the target type
    #[error("JSON adapter could not be created: {0}")]
    Resolution(String),

    /// The text was not valid JSON, or did not fit the target type
    #[error("failed to deserialize: {0}")]
    Malformed(String),

    /// The text was the JSON null literal
    #[error("deserialized result was null")]
    NullResult,

    /// The value could not be written as JSON
    #[error("failed to serialize: {0}")]
    Serialization(String),
}

impl From<MismatchKind> for MatchResult {
    fn from(kind: MismatchKind) -> Self {
        MatchResult::Mismatch(kind.to_string())
    }
}

/// Configuration captured by a conversion matcher
///
/// Holds the verb, target type name, codec and optional sub-matcher over the
/// converted value `V`. An expected value is folded into an equality
/// sub-matcher before it gets here, so [`verify`](Self::verify) is the only
/// place verdicts on converted values are made.
pub struct MatcherBase<V: ?Sized, C> {
    verb: Verb,
    type_name: Cow<'static, str>,
    codec: Arc<C>,
    sub_matcher: Option<Box<dyn Matcher<V>>>,
}

impl<V: ?Sized, C: Codec> MatcherBase<V, C> {
    /// Create a base with no sub-matcher
    pub fn new(verb: Verb, type_name: impl Into<Cow<'static, str>>, codec: Arc<C>) -> Self {
        Self {
            verb,
            type_name: type_name.into(),
            codec,
            sub_matcher: None,
        }
    }

    /// Set the matcher applied to successfully converted values
    pub fn with_sub_matcher<M: Matcher<V> + 'static>(mut self, matcher: M) -> Self {
        self.sub_matcher = Some(Box::new(matcher));
        self
    }

    /// Replace the codec, keeping everything else
    pub fn with_codec<C2: Codec>(self, codec: Arc<C2>) -> MatcherBase<V, C2> {
        MatcherBase {
            verb: self.verb,
            type_name: self.type_name,
            codec,
            sub_matcher: self.sub_matcher,
        }
    }

    /// Get the conversion direction
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Get the target type name as supplied by the type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get the codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Apply the sub-matcher if present, otherwise match
    pub fn verify(&self, value: &V) -> MatchResult {
        match &self.sub_matcher {
            Some(matcher) => matcher.matches(value),
            None => MatchResult::Match,
        }
    }

    /// Resolve a strict adapter for `T`
    ///
    /// Any codec failure here is a resolution failure, whatever the codec
    /// called it.
    pub fn retrieve_adapter<T: JsonType>(&self) -> Result<C::Adapter<T>, MismatchKind> {
        match self.codec.adapter::<T>() {
            Ok(adapter) => Ok(adapter.fail_on_unknown()),
            Err(err) => {
                tracing::debug!(verb = %self.verb, type_name = %self.type_name, error = %err, "adapter resolution failed");
                Err(MismatchKind::Resolution(err.to_string()))
            }
        }
    }

    /// `"<verb> to <sub-matcher description or type name>"`
    pub fn description(&self) -> String {
        match &self.sub_matcher {
            Some(matcher) => format!("{} to {}", self.verb, matcher.description()),
            None => format!("{} to {}", self.verb, normalize_type_name(&self.type_name)),
        }
    }

    /// `"is not <description>"`
    pub fn negated_description(&self) -> String {
        format!("is not {}", self.description())
    }
}

impl<V: ?Sized, C> fmt::Debug for MatcherBase<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherBase")
            .field("verb", &self.verb)
            .field("type_name", &self.type_name)
            .field(
                "sub_matcher",
                &self.sub_matcher.as_ref().map(|matcher| matcher.description()),
            )
            .finish_non_exhaustive()
    }
}
