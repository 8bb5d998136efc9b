#![allow(non_snake_case)]

use super::*;
use crate::{JsonType, UNKNOWN_TYPE};
use jsonmatch_core::contains_substring;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SOME_BAR_JSON: &str = r#"{"key":"bar-123","count":50}"#;

#[derive(Debug, PartialEq, Serialize, Deserialize, JsonType)]
struct Bar {
    key: String,
    count: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, JsonType)]
#[json_type(reflective)]
struct Foo {
    id: i32,
    name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonType)]
#[json_type(name = "")]
struct Anonymous {
    id: i32,
}

#[derive(Debug, Serialize, Deserialize, JsonType)]
struct TupleKeyed {
    cells: HashMap<(i32, i32), i32>,
}

fn some_bar() -> Bar {
    Bar {
        key: "bar-123".to_string(),
        count: 50,
    }
}

// ============================================================================
// Verdicts
// ============================================================================

#[test]
fn SerializeMatcher___no_match_argument___serializable_value_matches() {
    let matcher = serializes_to::<Bar>();

    assert_eq!(matcher.matches(&some_bar()), MatchResult::Match);
}

#[test]
fn SerializeMatcher___text_argument___exact_text_matches() {
    let matcher = serializes_to_text::<Bar>(SOME_BAR_JSON);

    assert!(matcher.matches(&some_bar()).is_match());
}

#[test]
fn SerializeMatcher___text_argument___different_text_reports_actual() {
    let matcher = serializes_to_text::<Bar>(r#"{"count":50,"key":"bar-123"}"#);

    let result = matcher.matches(&some_bar());

    assert_eq!(result, MatchResult::mismatch(format!("was {:?}", SOME_BAR_JSON)));
}

#[test]
fn SerializeMatcher___sub_matcher___contains_substring_matches() {
    let matcher = serializes_matching::<Bar, _>(contains_substring("bar-123"));

    assert!(matcher.matches(&some_bar()).is_match());
}

#[test]
fn SerializeMatcher___sub_matcher___missing_substring_mismatches() {
    let matcher = serializes_matching::<Bar, _>(contains_substring("bar-999"));

    assert!(matcher.matches(&some_bar()).is_mismatch());
}

#[test]
fn SerializeMatcher___reflective_type_on_default_codec___is_resolution_failure() {
    let matcher = serializes_to::<Foo>();

    let result = matcher.matches(&Foo {
        id: 42,
        name: "Foosius".to_string(),
    });

    assert!(
        result
            .reason()
            .unwrap()
            .starts_with("JSON adapter could not be created:")
    );
}

#[test]
fn SerializeMatcher___reflective_codec___serializes_reflective_type() {
    let matcher = serializes_to_text::<Foo>(r#"{"id":42,"name":"Foosius"}"#)
        .with_codec(Arc::new(JsonCodec::reflective()));

    let result = matcher.matches(&Foo {
        id: 42,
        name: "Foosius".to_string(),
    });

    assert!(result.is_match());
}

#[test]
fn SerializeMatcher___pretty_codec___feeds_pretty_text_to_sub_matcher() {
    let matcher = serializes_matching::<Bar, _>(contains_substring("\n"))
        .with_codec(Arc::new(JsonCodec::pretty()));

    assert!(matcher.matches(&some_bar()).is_match());
}

#[test]
fn SerializeMatcher___unserializable_value___is_serialize_failure() {
    let matcher = serializes_to::<TupleKeyed>();
    let value = TupleKeyed {
        cells: [((0, 0), 1)].into_iter().collect(),
    };

    let result = matcher.matches(&value);

    assert!(
        result
            .reason()
            .unwrap()
            .starts_with("failed to serialize:")
    );
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn SerializeMatcher___no_matcher___description_includes_type_name() {
    assert_eq!(serializes_to::<Bar>().description(), "serialize to Bar");
}

#[test]
fn SerializeMatcher___empty_type_name___description_includes_unknown() {
    assert!(
        serializes_to::<Anonymous>()
            .description()
            .contains(UNKNOWN_TYPE)
    );
}

#[test]
fn SerializeMatcher___text_argument___description_includes_expected_text() {
    let matcher = serializes_to_text::<Bar>(SOME_BAR_JSON);

    assert_eq!(
        matcher.description(),
        format!("serialize to is equal to {:?}", SOME_BAR_JSON)
    );
}

#[test]
fn SerializeMatcher___negated___description_includes_description() {
    let matcher = serializes_to::<Bar>();
    let description = matcher.description();

    let negated = !matcher;

    assert!(negated.description().contains(&description));
    assert_eq!(negated.description(), "is not serialize to Bar");
}

#[test]
fn SerializeMatcher___negated___rejects_serializable_value() {
    let negated = !serializes_to::<Bar>();

    assert!(negated.matches(&some_bar()).is_mismatch());
}
