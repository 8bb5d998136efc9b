#![allow(non_snake_case)]

use super::*;
use crate::{contains_substring, equal_to};

#[test]
fn check_that___matching_value___returns_ok() {
    let result = check_that(&42, &equal_to(42));

    assert!(result.is_ok());
}

#[test]
fn check_that___mismatching_value___returns_description_and_reason() {
    let err = check_that(&41, &equal_to(42)).unwrap_err();

    assert_eq!(err.description, "is equal to 42");
    assert_eq!(err.reason, "was 41");
}

#[test]
fn AssertionError___display___shows_expected_and_reason() {
    let err = AssertionError {
        description: "is equal to 42".to_string(),
        reason: "was 41".to_string(),
    };

    assert_eq!(err.to_string(), "expected: is equal to 42\nbut was 41");
}

#[test]
fn assert_that___matching_str___does_not_panic() {
    assert_that("hello world", &contains_substring("world"));
}

#[test]
#[should_panic(expected = "expected: contains substring \"moon\"")]
fn assert_that___mismatching_str___panics_with_description() {
    assert_that("hello world", &contains_substring("moon"));
}
