//! Tests for the construction and string coercion helpers.

#![cfg(all(feature = "tool", feature = "iterable"))]

use std::collections::VecDeque;

use dryist::iterable::{map, resolve, values};
use dryist::tool::{make, stringify};
use rstest::rstest;

#[rstest]
fn test_make_constructs_each_value() {
    let queues = resolve(map(vec![vec![1, 2, 3]], make::<VecDeque<i32>, _>()));

    assert_eq!(queues.len(), 1);
    assert_eq!(queues[&0].len(), 3);
    assert_eq!(queues[&0], VecDeque::from(vec![1, 2, 3]));
}

#[rstest]
fn test_make_with_owned_string() {
    let owned: Vec<String> = values(map(vec!["a", "b"], make::<String, &str>())).collect();
    assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
#[case(Some(1), Some("1"))]
#[case(Some(-7), Some("-7"))]
#[case(None, None)]
fn test_stringify(#[case] value: Option<i32>, #[case] expected: Option<&str>) {
    assert_eq!(stringify(value).as_deref(), expected);
}

#[rstest]
fn test_stringify_as_modifier_keeps_none() {
    let rendered: Vec<Option<String>> =
        values(map(vec![Some(1.5), None, Some(2.0)], stringify)).collect();
    assert_eq!(
        rendered,
        vec![Some("1.5".to_string()), None, Some("2".to_string())]
    );
}
