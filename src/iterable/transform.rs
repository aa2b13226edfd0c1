//! Operators that derive new pairs from existing ones.
//!
//! - [`map`]: replaces each value, keeps the key
//! - [`map_key`]: replaces each key, keeps the value
//! - [`map_both`]: replaces each value using both key and value
//!
//! All three are lazy and never change the number of pairs.

use std::fmt;

use super::sequence::impl_into_keyed_for_adapter;
use super::{IntoKeyed, KeyedSequence};

/// Applies a modifier to every value.
///
/// Emits `(k, modify(v))` for every pair `(k, v)`.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{map, resolve};
///
/// let strings = resolve(map(vec![1, 2, 3], |value| value.to_string()));
/// let values: Vec<&String> = strings.values().collect();
/// assert_eq!(values, vec!["1", "2", "3"]);
/// ```
pub fn map<S, F, U>(items: S, modify: F) -> Map<S::IntoSeq, F>
where
    S: IntoKeyed,
    F: FnMut(S::Value) -> U,
{
    Map::new(items.into_keyed(), modify)
}

/// Applies a modifier to every key.
///
/// Emits `(modify(k), v)` for every pair `(k, v)`. Keys that collide after
/// modification are all emitted; whatever consumes the sequence decides
/// what a collision means.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{keys, map_key};
///
/// let shifted: Vec<usize> = keys(map_key(vec!['a', 'b', 'c'], |key| key + 1)).collect();
/// assert_eq!(shifted, vec![1, 2, 3]);
/// ```
pub fn map_key<S, F, J>(items: S, modify: F) -> MapKey<S::IntoSeq, F>
where
    S: IntoKeyed,
    F: FnMut(S::Key) -> J,
{
    MapKey::new(items.into_keyed(), modify)
}

/// Applies a modifier to every value, giving it the key as well.
///
/// Emits `(k, modify(&k, v))` for every pair `(k, v)`.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{map_both, values};
///
/// let products: Vec<usize> = values(map_both(vec![1, 2, 3], |key, value| key * value)).collect();
/// assert_eq!(products, vec![0, 2, 6]);
/// ```
pub fn map_both<S, F, U>(items: S, modify: F) -> MapBoth<S::IntoSeq, F>
where
    S: IntoKeyed,
    F: FnMut(&S::Key, S::Value) -> U,
{
    MapBoth::new(items.into_keyed(), modify)
}

// =============================================================================
// Map
// =============================================================================

/// Lazy sequence returned by [`map`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Map<S, F> {
    sequence: S,
    modify: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(sequence: S, modify: F) -> Self {
        Self { sequence, modify }
    }
}

impl<S, F, U> Iterator for Map<S, F>
where
    S: KeyedSequence,
    F: FnMut(S::Value) -> U,
{
    type Item = (S::Key, U);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.sequence.next_pair()?;
        Some((key, (self.modify)(value)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MapKey
// =============================================================================

/// Lazy sequence returned by [`map_key`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct MapKey<S, F> {
    sequence: S,
    modify: F,
}

impl<S, F> MapKey<S, F> {
    pub(crate) const fn new(sequence: S, modify: F) -> Self {
        Self { sequence, modify }
    }
}

impl<S, F, J> Iterator for MapKey<S, F>
where
    S: KeyedSequence,
    F: FnMut(S::Key) -> J,
{
    type Item = (J, S::Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.sequence.next_pair()?;
        Some(((self.modify)(key), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapKey<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapKey")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MapBoth
// =============================================================================

/// Lazy sequence returned by [`map_both`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct MapBoth<S, F> {
    sequence: S,
    modify: F,
}

impl<S, F> MapBoth<S, F> {
    pub(crate) const fn new(sequence: S, modify: F) -> Self {
        Self { sequence, modify }
    }
}

impl<S, F, U> Iterator for MapBoth<S, F>
where
    S: KeyedSequence,
    F: FnMut(&S::Key, S::Value) -> U,
{
    type Item = (S::Key, U);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.sequence.next_pair()?;
        let value = (self.modify)(&key, value);
        Some((key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapBoth<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapBoth")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl_into_keyed_for_adapter!(Map<S, F>, MapKey<S, F>, MapBoth<S, F>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterable::Producer;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_keeps_keys() {
        let pairs: Vec<(usize, i32)> = map(vec![10, 20], |value| value / 10).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[rstest]
    fn test_map_key_does_not_deduplicate() {
        let pairs: Vec<(&str, i32)> = map_key(vec![1, 2, 3], |_| "same").collect();
        assert_eq!(pairs, vec![("same", 1), ("same", 2), ("same", 3)]);
    }

    #[rstest]
    fn test_map_both_receives_key_and_value() {
        let pairs: Vec<(&str, String)> = map_both(
            Producer::new(vec![("a", 1), ("b", 2)].into_iter()),
            |key, value| format!("{key}{value}"),
        )
        .collect();
        assert_eq!(
            pairs,
            vec![("a", "a1".to_string()), ("b", "b2".to_string())]
        );
    }

    #[rstest]
    fn test_modifier_runs_once_per_pulled_pair() {
        let calls = Cell::new(0);
        let mut sequence = map(vec![1, 2, 3], |value| {
            calls.set(calls.get() + 1);
            value
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some((0, 1)));
        assert_eq!(calls.get(), 1);
        let _ = sequence.by_ref().count();
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_size_hint_is_forwarded() {
        let sequence = map_key(vec![1, 2, 3], |key| key * 2);
        assert_eq!(sequence.size_hint(), (3, Some(3)));
    }
}
