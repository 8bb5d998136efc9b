#![allow(non_snake_case)]

use super::*;
use crate::prelude::*;

#[test]
fn init_test_logging___called_twice___returns_same_result() {
    let first = init_test_logging();
    let second = init_test_logging();

    assert_eq!(first, second);
}

#[test]
fn init_test_logging___matchers_still_evaluate_with_subscriber() {
    init_test_logging();

    let result = deserializes_to::<String>().evaluate(Some("aa{"));

    assert!(result.is_mismatch());
}
