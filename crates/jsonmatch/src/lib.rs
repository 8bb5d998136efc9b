//! # jsonmatch
//!
//! Matchers asserting that values survive JSON serialization and
//! deserialization.
//!
//! jsonmatch sits between a JSON codec and a matcher framework, providing:
//! - [`deserializes_to`] and friends for JSON text that must become a typed value
//! - [`serializes_to`] and friends for typed values that must become JSON text
//! - Classified mismatch reasons for null input, unresolvable adapters,
//!   malformed JSON, unknown fields, and the `null` literal
//!
//! ## Quick Start
//!
//! ```ignore
//! use jsonmatch::prelude::*;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, JsonType)]
//! struct Bar {
//!     key: String,
//!     count: i32,
//! }
//!
//! #[test]
//! fn bar_roundtrips() {
//!     let bar = Bar { key: "bar-123".into(), count: 50 };
//!
//!     assert_that(&bar, &serializes_to_text::<Bar>(r#"{"key":"bar-123","count":50}"#));
//!     assert_that(r#"{"key":"bar-123","count":50}"#, &deserializes_to_value(bar));
//!     assert_that(r#"{"key":"bar-123"}"#, &!deserializes_to::<Bar>());
//! }
//! ```
//!
//! ## Codecs
//!
//! Each matcher uses a fresh [`JsonCodec`] unless one is supplied with
//! `with_codec`. Types marked `#[json_type(reflective)]` only resolve on a
//! codec built with reflection enabled:
//!
//! ```ignore
//! let codec = Arc::new(JsonCodec::reflective());
//! assert_that(FOO_JSON, &deserializes_to::<Foo>().with_codec(codec));
//! ```
//!
//! ## Crate Structure
//!
//! This facade re-exports from:
//! - [`jsonmatch_core`] - Matcher trait and basic matchers
//! - [`jsonmatch_codec`] - Codec, adapters and type descriptors
//! - [`jsonmatch_macros`] - `#[derive(JsonType)]`

extern crate self as jsonmatch;

mod base;
mod deserialize;
pub mod logging;
mod name;
mod serialize;

pub use base::{MatcherBase, MismatchKind, Verb};
#[allow(deprecated)]
pub use deserialize::{
    DeserializeMatcher, JsonText, converts_to, converts_to_value, deserializes_matching,
    deserializes_to, deserializes_to_value,
};
pub use name::{UNKNOWN_ARRAY_TYPE, UNKNOWN_TYPE, normalize_type_name};
pub use serialize::{SerializeMatcher, serializes_matching, serializes_to, serializes_to_text};

// Re-export the matcher framework and codec layers
pub use jsonmatch_codec::{
    Adapter, AdapterKind, Codec, CodecConfig, CodecError, JsonAdapter, JsonCodec,
    JsonCodecBuilder, JsonType,
};
pub use jsonmatch_core::{
    AssertionError, MatchResult, Matcher, MatcherExt, assert_that, check_that,
    contains_substring, equal_to, has, is_empty_string, not, predicate,
};

// Re-export macros
pub use jsonmatch_macros::JsonType;

// Re-export common dependencies that test authors need
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports.
///
/// Use `use jsonmatch::prelude::*;` to import commonly used items.
///
/// This includes:
/// - Factories: `deserializes_to`, `serializes_to` and their variants
/// - Matchers: `equal_to`, `contains_substring`, `has`, `not`, ...
/// - Assertions: `assert_that`, `check_that`
/// - Codec: `JsonCodec`, `JsonType` (trait and derive)
/// - Serde derives: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        DeserializeMatcher, JsonCodec, JsonType, MatchResult, Matcher, MatcherExt,
        SerializeMatcher, assert_that, check_that, contains_substring, deserializes_matching,
        deserializes_to, deserializes_to_value, equal_to, has, is_empty_string, not, predicate,
        serializes_matching, serializes_to, serializes_to_text,
    };

    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
