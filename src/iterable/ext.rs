//! Method-call form of the keyed sequence operators.

use std::borrow::Borrow;
use std::hash::Hash;

use super::filter::{Filter, FilterKey, Take};
use super::projection::{Keys, Values, resolve_sequence};
use super::transform::{Map, MapBoth, MapKey};
use super::{KeyedSequence, OrderedMap};

/// Extension methods available on every [`KeyedSequence`].
///
/// Each method is the chained counterpart of the free function with the
/// matching name, so
/// `items.into_keyed().filter_values(p).map_values(f)` is the same as
/// `map(filter(items, p), f)`.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{IntoKeyed, KeyedSequenceExt};
///
/// let labels = vec![3, 4, 5]
///     .into_keyed()
///     .filter_values(|value| *value != 4)
///     .map_both(|key, value| format!("{key}:{value}"))
///     .resolve();
///
/// assert_eq!(format!("{labels}"), "{0: 0:3, 2: 2:5}");
/// ```
pub trait KeyedSequenceExt: KeyedSequence + Sized {
    /// Chained form of [`map`](super::map).
    fn map_values<F, U>(self, modify: F) -> Map<Self, F>
    where
        F: FnMut(Self::Value) -> U,
    {
        Map::new(self, modify)
    }

    /// Chained form of [`map_key`](super::map_key).
    fn map_keys<F, J>(self, modify: F) -> MapKey<Self, F>
    where
        F: FnMut(Self::Key) -> J,
    {
        MapKey::new(self, modify)
    }

    /// Chained form of [`map_both`](super::map_both).
    fn map_both<F, U>(self, modify: F) -> MapBoth<Self, F>
    where
        F: FnMut(&Self::Key, Self::Value) -> U,
    {
        MapBoth::new(self, modify)
    }

    /// Chained form of [`filter`](super::filter).
    fn filter_values<P>(self, accept: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        Filter::new(self, accept)
    }

    /// Chained form of [`filter_key`](super::filter_key).
    fn filter_keys<P>(self, accept: P) -> FilterKey<Self, P>
    where
        P: FnMut(&Self::Key) -> bool,
    {
        FilterKey::new(self, accept)
    }

    /// Chained form of [`take`](super::take).
    fn take_keys<A, I>(self, allowed: I) -> Take<Self, A>
    where
        Self::Key: Borrow<A>,
        A: PartialEq,
        I: IntoIterator<Item = A>,
    {
        Take::new(self, allowed.into_iter().collect())
    }

    /// Chained form of [`keys`](super::keys).
    fn keys(self) -> Keys<Self> {
        Keys::new(self)
    }

    /// Chained form of [`values`](super::values).
    fn values(self) -> Values<Self> {
        Values::new(self)
    }

    /// Chained form of [`resolve`](super::resolve).
    fn resolve(self) -> OrderedMap<Self::Key, Self::Value>
    where
        Self::Key: Eq + Hash + Clone,
    {
        resolve_sequence(self)
    }
}

impl<S: KeyedSequence> KeyedSequenceExt for S {}
