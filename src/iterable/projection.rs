//! Projections that reduce a keyed sequence to keys, values, a count, or a
//! concrete [`OrderedMap`].
//!
//! [`keys`] and [`values`] are lazy and safe on infinite sources. Their
//! output is itself a keyed sequence, re-keyed by position, so it can feed
//! any other operator. [`count`] and [`resolve`] drain their input and do not
//! terminate on an infinite source.

use std::hash::Hash;
use std::iter::{Enumerate, FusedIterator};

use super::sequence::preallocation;
use super::{IntoKeyed, KeyedSequence, OrderedMap};

/// Projects each pair onto its key.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{Producer, keys};
///
/// let producer = Producer::new(vec![("foo", 1), ("bar", 2)].into_iter());
/// let names: Vec<&str> = keys(producer).collect();
/// assert_eq!(names, vec!["foo", "bar"]);
/// ```
pub fn keys<S: IntoKeyed>(items: S) -> Keys<S::IntoSeq> {
    Keys::new(items.into_keyed())
}

/// Projects each pair onto its value.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{Producer, values};
///
/// let producer = Producer::new(vec![("foo", 1), ("bar", 2)].into_iter());
/// let numbers: Vec<i32> = values(producer).collect();
/// assert_eq!(numbers, vec![1, 2]);
/// ```
pub fn values<S: IntoKeyed>(items: S) -> Values<S::IntoSeq> {
    Values::new(items.into_keyed())
}

/// Counts the pairs of a sequence by draining it.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{Producer, count};
///
/// assert_eq!(count(vec!['a', 'b', 'c']), 3);
/// assert_eq!(count(Producer::list(0..10)), 10);
/// ```
pub fn count<S: IntoKeyed>(items: S) -> usize {
    items.into_keyed().count()
}

/// Drains a sequence into an [`OrderedMap`].
///
/// Pairs are inserted in traversal order. When a key repeats, the later
/// value replaces the earlier one and the key keeps its first position.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{map_key, resolve};
///
/// let collapsed = resolve(map_key(vec!["a", "b", "c"], |key| key / 2));
/// assert_eq!(collapsed.len(), 2);
/// assert_eq!(collapsed[&0], "b");
/// assert_eq!(collapsed[&1], "c");
/// ```
pub fn resolve<S>(items: S) -> OrderedMap<S::Key, S::Value>
where
    S: IntoKeyed,
    S::Key: Eq + Hash + Clone,
{
    resolve_sequence(items.into_keyed())
}

pub(crate) fn resolve_sequence<S>(mut sequence: S) -> OrderedMap<S::Key, S::Value>
where
    S: KeyedSequence,
    S::Key: Eq + Hash + Clone,
{
    let mut resolved = OrderedMap::with_capacity(preallocation(sequence.size_hint()));
    while let Some((key, value)) = sequence.next_pair() {
        resolved.insert(key, value);
    }
    resolved
}

/// Counts a sequence of fallible values, stopping at the first error.
///
/// The error is returned exactly as the sequence produced it.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{map, try_count};
///
/// let parsed = map(vec!["1", "2", "x", "4"], |text| text.parse::<i32>());
/// assert!(try_count(parsed).is_err());
///
/// let parsed = map(vec!["1", "2"], |text| text.parse::<i32>());
/// assert_eq!(try_count(parsed), Ok(2));
/// ```
pub fn try_count<S, V, E>(items: S) -> Result<usize, E>
where
    S: IntoKeyed<Value = Result<V, E>>,
{
    let mut sequence = items.into_keyed();
    let mut total = 0;
    while let Some((_, value)) = sequence.next_pair() {
        value?;
        total += 1;
    }
    Ok(total)
}

/// Drains a sequence of fallible values into an [`OrderedMap`], stopping at
/// the first error.
///
/// Nothing after the failing pair is pulled. The error is returned exactly
/// as the sequence produced it.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{map, try_resolve};
///
/// let parsed = try_resolve(map(vec!["1", "2"], |text| text.parse::<i32>())).unwrap();
/// assert_eq!(parsed[&1], 2);
///
/// let failed = try_resolve(map(vec!["1", "two"], |text| text.parse::<i32>()));
/// assert!(failed.is_err());
/// ```
pub fn try_resolve<S, V, E>(items: S) -> Result<OrderedMap<S::Key, V>, E>
where
    S: IntoKeyed<Value = Result<V, E>>,
    S::Key: Eq + Hash + Clone,
{
    let mut sequence = items.into_keyed();
    let mut resolved = OrderedMap::with_capacity(preallocation(sequence.size_hint()));
    while let Some((key, value)) = sequence.next_pair() {
        resolved.insert(key, value?);
    }
    Ok(resolved)
}

/// Lazy sequence returned by [`keys`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Keys<S> {
    sequence: S,
}

impl<S> Keys<S> {
    pub(crate) const fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S: KeyedSequence> Iterator for Keys<S> {
    type Item = S::Key;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next_pair().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<S: KeyedSequence + FusedIterator> FusedIterator for Keys<S> {}

impl<S: KeyedSequence> IntoKeyed for Keys<S> {
    type Key = usize;
    type Value = S::Key;
    type IntoSeq = Enumerate<Self>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.enumerate()
    }
}

/// Lazy sequence returned by [`values`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Values<S> {
    sequence: S,
}

impl<S> Values<S> {
    pub(crate) const fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S: KeyedSequence> Iterator for Values<S> {
    type Item = S::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next_pair().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<S: KeyedSequence + FusedIterator> FusedIterator for Values<S> {}

impl<S: KeyedSequence> IntoKeyed for Values<S> {
    type Key = usize;
    type Value = S::Value;
    type IntoSeq = Enumerate<Self>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.enumerate()
    }
}
