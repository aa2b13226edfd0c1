#![cfg(all(feature = "serde", feature = "iterable"))]

//! Integration tests for serde support in dryist.
//!
//! These tests verify that `OrderedMap` and `Key` serialize to and from
//! JSON without losing order or key tags.

use dryist::iterable::{Key, OrderedMap, combine, resolve};
use rstest::rstest;

// =============================================================================
// Key Integration Tests
// =============================================================================

#[rstest]
fn test_key_serializes_untagged() {
    assert_eq!(serde_json::to_string(&Key::from(7)).unwrap(), "7");
    assert_eq!(serde_json::to_string(&Key::from("seven")).unwrap(), r#""seven""#);
}

#[rstest]
fn test_key_json_roundtrip_keeps_tag() {
    let keys = vec![Key::from(1), Key::from("1")];
    let json = serde_json::to_string(&keys).unwrap();
    let restored: Vec<Key> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, keys);
    assert!(restored[0].is_int());
    assert!(restored[1].is_str());
}

// =============================================================================
// OrderedMap Integration Tests
// =============================================================================

#[rstest]
fn test_ordered_map_serializes_in_insertion_order() {
    let map = resolve(combine(vec!["zulu", "alpha", "mike"], vec![1, 2, 3]).unwrap());
    assert_eq!(
        serde_json::to_string(&map).unwrap(),
        r#"{"zulu":1,"alpha":2,"mike":3}"#
    );
}

#[rstest]
fn test_ordered_map_json_roundtrip() {
    let map: OrderedMap<String, Vec<i32>> = [
        ("b".to_string(), vec![1]),
        ("a".to_string(), vec![2, 3]),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&map).unwrap();
    let restored: OrderedMap<String, Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);
}

#[rstest]
fn test_ordered_map_deserialize_duplicate_key_keeps_last() {
    let restored: OrderedMap<String, i32> =
        serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();

    let entries: Vec<(String, i32)> = restored.into_iter().collect();
    assert_eq!(entries, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
}
