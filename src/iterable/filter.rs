//! Operators that drop pairs.
//!
//! Rejected pairs are skipped, never emitted as holes, and the keys of
//! accepted pairs are preserved. A filter over an infinite source keeps
//! pulling until its predicate accepts something, so a predicate that never
//! accepts needs an outer bound such as [`Iterator::take`].

use std::borrow::Borrow;
use std::fmt;

use smallvec::SmallVec;

use super::sequence::impl_into_keyed_for_adapter;
use super::{IntoKeyed, KeyedSequence};

/// Number of allowed keys [`Take`] stores inline before spilling to the heap.
const INLINE_KEYS: usize = 8;

/// Keeps only the pairs whose value satisfies `accept`.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{filter, values};
///
/// let evens: Vec<i32> = values(filter(vec![0, 1, 2, 3, 4], |value| value % 2 == 0)).collect();
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
pub fn filter<S, P>(items: S, accept: P) -> Filter<S::IntoSeq, P>
where
    S: IntoKeyed,
    P: FnMut(&S::Value) -> bool,
{
    Filter::new(items.into_keyed(), accept)
}

/// Keeps only the pairs whose key satisfies `accept`.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{filter_key, keys};
///
/// let odd_positions: Vec<usize> = keys(filter_key(vec!['a', 'b', 'c', 'd'], |key| key % 2 == 1)).collect();
/// assert_eq!(odd_positions, vec![1, 3]);
/// ```
pub fn filter_key<S, P>(items: S, accept: P) -> FilterKey<S::IntoSeq, P>
where
    S: IntoKeyed,
    P: FnMut(&S::Key) -> bool,
{
    FilterKey::new(items.into_keyed(), accept)
}

/// Keeps only the pairs whose key appears in `allowed`.
///
/// Membership uses the key type's own equality. With [`Key`](super::Key)
/// that is strict: an integer key never matches a string key.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{Key, OrderedMap, keys, take};
///
/// let items: OrderedMap<Key, &str> = [
///     (Key::from("foo"), "foo"),
///     (Key::from("bar"), "bar"),
///     (Key::from(1), "one"),
/// ]
/// .into_iter()
/// .collect();
///
/// let kept: Vec<Key> = keys(take(items.clone(), [Key::from("foo")])).collect();
/// assert_eq!(kept, vec![Key::from("foo")]);
///
/// let kept: Vec<Key> = keys(take(items, [Key::from("1")])).collect();
/// assert!(kept.is_empty());
/// ```
pub fn take<S, A, I>(items: S, allowed: I) -> Take<S::IntoSeq, A>
where
    S: IntoKeyed,
    S::Key: Borrow<A>,
    A: PartialEq,
    I: IntoIterator<Item = A>,
{
    Take::new(items.into_keyed(), allowed.into_iter().collect())
}

// =============================================================================
// Filter
// =============================================================================

/// Lazy sequence returned by [`filter`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Filter<S, P> {
    sequence: S,
    accept: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(sequence: S, accept: P) -> Self {
        Self { sequence, accept }
    }
}

impl<S, P> Iterator for Filter<S, P>
where
    S: KeyedSequence,
    P: FnMut(&S::Value) -> bool,
{
    type Item = (S::Key, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, value)) = self.sequence.next_pair() {
            if (self.accept)(&value) {
                return Some((key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.sequence.size_hint().1)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FilterKey
// =============================================================================

/// Lazy sequence returned by [`filter_key`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct FilterKey<S, P> {
    sequence: S,
    accept: P,
}

impl<S, P> FilterKey<S, P> {
    pub(crate) const fn new(sequence: S, accept: P) -> Self {
        Self { sequence, accept }
    }
}

impl<S, P> Iterator for FilterKey<S, P>
where
    S: KeyedSequence,
    P: FnMut(&S::Key) -> bool,
{
    type Item = (S::Key, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, value)) = self.sequence.next_pair() {
            if (self.accept)(&key) {
                return Some((key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.sequence.size_hint().1)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for FilterKey<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterKey")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Take
// =============================================================================

/// Lazy sequence returned by [`take`].
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Take<S, A> {
    sequence: S,
    allowed: SmallVec<[A; INLINE_KEYS]>,
}

impl<S, A> Take<S, A> {
    pub(crate) const fn new(sequence: S, allowed: SmallVec<[A; INLINE_KEYS]>) -> Self {
        Self { sequence, allowed }
    }
}

impl<S, A> Take<S, A>
where
    A: PartialEq,
{
    #[inline]
    fn allows<K: Borrow<A>>(&self, key: &K) -> bool {
        let key: &A = key.borrow();
        self.allowed.iter().any(|candidate| candidate == key)
    }
}

impl<S, A> Iterator for Take<S, A>
where
    S: KeyedSequence,
    S::Key: Borrow<A>,
    A: PartialEq,
{
    type Item = (S::Key, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, value)) = self.sequence.next_pair() {
            if self.allows(&key) {
                return Some((key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.sequence.size_hint().1)
    }
}

impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for Take<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Take")
            .field("sequence", &self.sequence)
            .field("allowed", &self.allowed)
            .finish()
    }
}

impl_into_keyed_for_adapter!(Filter<S, P>, FilterKey<S, P>, Take<S, A>);
