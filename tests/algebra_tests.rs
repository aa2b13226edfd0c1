//! Unit and law tests for the function combinators.
//!
//! Tests for identity, always, compose and invert, alone and as callbacks
//! for the iterable operators.

#![cfg(all(feature = "algebra", feature = "iterable"))]

use dryist::algebra::{always, compose, id, identity, invert};
use dryist::iterable::{filter, filter_key, keys, map, resolve, values};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// identity
// =============================================================================

#[rstest]
#[case(42)]
#[case(-100)]
#[case(0)]
fn test_identity_returns_same_integer(#[case] value: i32) {
    assert_eq!(identity(value), value);
    assert_eq!(id(value), value);
}

#[rstest]
fn test_identity_preserves_ownership() {
    let owned = String::from("owned string");
    let result = identity(owned);
    assert_eq!(result, "owned string");
}

#[rstest]
fn test_identity_as_modifier_keeps_sequence() {
    let items = vec!["a", "b"];
    assert_eq!(resolve(map(&items, identity)), resolve(&items));
}

// =============================================================================
// always
// =============================================================================

#[rstest]
fn test_always_ignores_input() {
    let always_five = always(5);
    assert_eq!(always_five("ignored"), 5);
    assert_eq!(always_five("anything"), 5);
}

#[rstest]
fn test_always_can_be_called_multiple_times() {
    let always_ten = always(String::from("ten"));
    for _ in 0..100 {
        assert_eq!(always_ten(()), "ten");
    }
}

#[rstest]
fn test_always_replaces_every_value() {
    let replaced: Vec<&str> = values(map(vec![1, 2, 3], always("x"))).collect();
    assert_eq!(replaced, vec!["x", "x", "x"]);
}

// =============================================================================
// compose
// =============================================================================

#[rstest]
fn test_compose_substitutes() {
    let capitalize = |text: String| {
        let mut characters = text.chars();
        characters.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(characters).collect()
        })
    };
    let lowercase = |text: &str| text.to_lowercase();

    assert_eq!(compose(capitalize, lowercase)("HELLO, WORLD"), "Hello, world");
}

#[rstest]
fn test_compose_as_key_modifier() {
    let shifted: Vec<String> = keys(dryist::iterable::map_key(
        vec!['a', 'b'],
        compose(|key: usize| format!("#{key}"), |key: usize| key + 1),
    ))
    .collect();
    assert_eq!(shifted, vec!["#1", "#2"]);
}

// =============================================================================
// invert
// =============================================================================

#[rstest]
fn test_invert_filters_complement() {
    let is_small = |value: &i32| *value < 3;

    let small: Vec<i32> = values(filter(vec![1, 2, 3, 4], is_small)).collect();
    let large: Vec<i32> = values(filter(vec![1, 2, 3, 4], invert(is_small))).collect();

    assert_eq!(small, vec![1, 2]);
    assert_eq!(large, vec![3, 4]);
}

#[rstest]
fn test_invert_on_keys() {
    let is_first = |key: &usize| *key == 0;
    let rest: Vec<usize> = keys(filter_key(vec!['x', 'y', 'z'], invert(is_first))).collect();
    assert_eq!(rest, vec![1, 2]);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// compose(identity, f) == f and compose(f, identity) == f
    #[test]
    fn prop_compose_identity(value in any::<i32>()) {
        let double = |input: i32| input.wrapping_mul(2);
        prop_assert_eq!(compose(identity, double)(value), double(value));
        prop_assert_eq!(compose(double, identity)(value), double(value));
    }
}

proptest! {
    /// compose(f, compose(g, h)) == compose(compose(f, g), h)
    #[test]
    fn prop_compose_associativity(value in any::<i32>()) {
        let f = |input: i32| input.wrapping_add(1);
        let g = |input: i32| input.wrapping_mul(3);
        let h = |input: i32| input.wrapping_sub(7);
        prop_assert_eq!(compose(f, compose(g, h))(value), compose(compose(f, g), h)(value));
    }
}

proptest! {
    /// invert(invert(p)) == p
    #[test]
    fn prop_double_inversion(value in any::<i32>()) {
        let is_positive = |input: &i32| *input > 0;
        prop_assert_eq!(invert(invert(is_positive))(&value), is_positive(&value));
    }
}
