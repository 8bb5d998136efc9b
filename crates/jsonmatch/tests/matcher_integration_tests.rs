//! Matcher Integration Tests
//!
//! These tests drive the public factory surface the way a test suite would:
//! - Round trips of derived types through both directions
//! - Mismatch classification for every failure category
//! - Codecs shared between matchers and threads
//! - Panicking assertions with readable messages

#![allow(non_snake_case)]

use jsonmatch::prelude::*;
use jsonmatch::{CodecConfig, normalize_type_name};
use std::collections::BTreeMap;
use std::thread;

const SOME_BAR_JSON: &str = r#"{"key":"bar-123","count":50}"#;
const SOME_FOO_JSON: &str = r#"{"id":42,"name":"Foosius"}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonType)]
struct Bar {
    key: String,
    count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonType)]
#[json_type(reflective)]
struct Foo {
    id: i32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonType)]
#[json_type(name = "Inventory")]
struct Shelf {
    bars: Vec<Bar>,
    labels: BTreeMap<String, String>,
}

fn some_bar() -> Bar {
    Bar {
        key: "bar-123".to_string(),
        count: 50,
    }
}

fn some_shelf() -> Shelf {
    Shelf {
        bars: vec![some_bar(), Bar {
            key: "bar-456".to_string(),
            count: 0,
        }],
        labels: [("aisle".to_string(), "7".to_string())].into_iter().collect(),
    }
}

// Deserialize tests

#[test]
fn deserializes_to___generated_type___accepts_matching_text() {
    assert_that(SOME_BAR_JSON, &deserializes_to::<Bar>());
    assert_that(SOME_BAR_JSON, &deserializes_to_value(some_bar()));
}

#[test]
fn deserializes_to_value___different_value___reports_actual_value() {
    let expected = Bar {
        key: "x".to_string(),
        count: 50,
    };

    let err = check_that(SOME_BAR_JSON, &deserializes_to_value(expected)).unwrap_err();

    assert!(err.reason.contains("bar-123"));
    assert!(err.description.starts_with("deserialize to is equal to"));
}

#[test]
fn deserializes_to___object_for_string___is_structural_failure() {
    let result = deserializes_to::<String>().matches("{}");

    assert!(
        result
            .reason()
            .unwrap()
            .starts_with("failed to deserialize: unexpected JSON data")
    );
}

#[test]
fn deserializes_to___nested_unknown_field___reports_path() {
    let text = r#"{"bars":[{"key":"a","count":1,"colour":"red"}],"labels":{}}"#;

    let result = deserializes_to::<Shelf>().matches(text);

    assert_eq!(
        result.reason(),
        Some("failed to deserialize: unknown field at $.bars[0].colour")
    );
}

#[test]
fn deserializes_matching___composed_sub_matchers___checks_fields() {
    let matcher = deserializes_matching::<Bar, _>(
        has("key", |bar: &Bar| &bar.key, contains_substring("bar-"))
            .and(predicate("has a positive count", |bar: &Bar| bar.count > 0)),
    );

    assert_that(SOME_BAR_JSON, &matcher);
    assert_that(r#"{"key":"bar-1","count":0}"#, &!matcher);
}

#[test]
fn deserializes_to___optional_text___absent_is_null_failure() {
    let actual: Option<String> = None;

    let err = check_that(&actual, &deserializes_to::<Bar>()).unwrap_err();

    assert_eq!(err.reason, "actual was null");
}

// Serialize tests

#[test]
fn serializes_to___generated_type___produces_compact_text() {
    assert_that(&some_bar(), &serializes_to_text::<Bar>(SOME_BAR_JSON));
    assert_that(
        &some_bar(),
        &serializes_matching::<Bar, _>(contains_substring("bar-123")),
    );
}

#[test]
fn serializes_to___custom_name___appears_in_description() {
    assert_eq!(
        serializes_to::<Shelf>().description(),
        "serialize to Inventory"
    );
}

// Resolution tests

#[test]
fn reflective_type___default_codec___fails_resolution_both_ways() {
    let foo = Foo {
        id: 42,
        name: "Foosius".to_string(),
    };

    let deserialized = deserializes_to::<Foo>().matches(SOME_FOO_JSON);
    let serialized = serializes_to::<Foo>().matches(&foo);

    for result in [deserialized, serialized] {
        assert!(
            result
                .reason()
                .unwrap()
                .starts_with("JSON adapter could not be created:")
        );
    }
}

#[test]
fn reflective_type___registered_on_builder___resolves() {
    let codec = Arc::new(JsonCodec::builder().register::<Foo>().build());

    let matcher = deserializes_to::<Foo>().with_codec(codec);

    assert_that(SOME_FOO_JSON, &matcher);
}

#[test]
fn codec_config___reflective_flag___enables_reflective_types() {
    let config = CodecConfig::from_json(br#"{"reflective": true}"#).unwrap();
    let codec = Arc::new(JsonCodec::from_config(&config));

    assert_that(SOME_FOO_JSON, &deserializes_to::<Foo>().with_codec(codec));
}

// Shared codec tests

#[test]
fn shared_codec___across_threads___gives_same_verdicts() {
    let codec = Arc::new(JsonCodec::reflective());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let foo = Foo {
                    id: i,
                    name: format!("foo-{}", i),
                };
                let text = serde_json::to_string(&foo).unwrap();
                let deserialize = deserializes_to_value(foo.clone()).with_codec(Arc::clone(&codec));
                let serialize = serializes_to_text::<Foo>(text.clone()).with_codec(codec);

                deserialize.matches(text.as_str()).is_match() && serialize.matches(&foo).is_match()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn round_trip___shelf___serialized_text_deserializes_back() {
    let shelf = some_shelf();
    let text = serde_json::to_string(&shelf).unwrap();

    assert_that(&shelf, &serializes_to_text::<Shelf>(text.clone()));
    assert_that(text.as_str(), &deserializes_to_value(shelf));
}

// Description tests

#[test]
fn sentinel_names___normalized_for_diagnostics() {
    assert_eq!(normalize_type_name(""), "unknown type");
    assert_eq!(normalize_type_name("[]"), "array of unknown type");
    assert_eq!(normalize_type_name("Bar"), "Bar");
}

#[test]
#[should_panic(expected = "expected: deserialize to Bar\nbut failed to deserialize: malformed JSON")]
fn assert_that___malformed_text___panics_with_reason() {
    assert_that("aa{", &deserializes_to::<Bar>());
}
