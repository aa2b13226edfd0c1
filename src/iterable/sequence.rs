//! The keyed sequence protocol and the adapters that bridge concrete
//! sources into it.

use std::iter::{Enumerate, FromFn, FusedIterator};

/// An ordered, single-pass production of `(key, value)` pairs.
///
/// Implemented for every `Iterator<Item = (K, V)>`. Pairs are pulled one at
/// a time in forward order; nothing is computed ahead of demand.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::KeyedSequence;
///
/// let mut sequence = vec![("a", 1), ("b", 2)].into_iter();
/// assert_eq!(sequence.next_pair(), Some(("a", 1)));
/// assert_eq!(sequence.next_pair(), Some(("b", 2)));
/// assert_eq!(sequence.next_pair(), None);
/// ```
pub trait KeyedSequence: Iterator {
    /// The key type of each pair.
    type Key;
    /// The value type of each pair.
    type Value;

    /// Pulls the next pair, or `None` once the sequence has ended.
    fn next_pair(&mut self) -> Option<(Self::Key, Self::Value)>;
}

impl<I, K, V> KeyedSequence for I
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn next_pair(&mut self) -> Option<(K, V)> {
        self.next()
    }
}

/// Conversion of a backing source into a [`KeyedSequence`].
///
/// Lists are keyed by 0-based position. Ordered maps keep their keys.
/// Every adapter returned by this crate converts into itself, so operators
/// nest freely.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::IntoKeyed;
///
/// let pairs: Vec<(usize, &str)> = vec!["x", "y"].into_keyed().collect();
/// assert_eq!(pairs, vec![(0, "x"), (1, "y")]);
/// ```
pub trait IntoKeyed {
    /// The key type of the resulting sequence.
    type Key;
    /// The value type of the resulting sequence.
    type Value;
    /// The sequence this source turns into.
    type IntoSeq: KeyedSequence<Key = Self::Key, Value = Self::Value>;

    /// Converts the source into a keyed sequence.
    fn into_keyed(self) -> Self::IntoSeq;
}

impl<V> IntoKeyed for Vec<V> {
    type Key = usize;
    type Value = V;
    type IntoSeq = Enumerate<std::vec::IntoIter<V>>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.into_iter().enumerate()
    }
}

impl<V, const N: usize> IntoKeyed for [V; N] {
    type Key = usize;
    type Value = V;
    type IntoSeq = Enumerate<std::array::IntoIter<V, N>>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.into_iter().enumerate()
    }
}

impl<'a, V> IntoKeyed for &'a [V] {
    type Key = usize;
    type Value = &'a V;
    type IntoSeq = Enumerate<std::slice::Iter<'a, V>>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.iter().enumerate()
    }
}

impl<'a, V> IntoKeyed for &'a Vec<V> {
    type Key = usize;
    type Value = &'a V;
    type IntoSeq = Enumerate<std::slice::Iter<'a, V>>;

    #[inline]
    fn into_keyed(self) -> Self::IntoSeq {
        self.iter().enumerate()
    }
}

impl<I, V> IntoKeyed for Enumerate<I>
where
    I: Iterator<Item = V>,
{
    type Key = usize;
    type Value = V;
    type IntoSeq = Self;

    #[inline]
    fn into_keyed(self) -> Self {
        self
    }
}

/// An open-ended, single-pass source of pairs.
///
/// A `Producer` may be finite or infinite and its length is unknown until it
/// has been drained. It is fused: once it reports the end it stays empty, so
/// traversing it a second time yields nothing rather than repeating the
/// first traversal. Pass it by `&mut` to keep access to
/// [`is_exhausted`](Producer::is_exhausted) afterwards.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{Producer, resolve};
///
/// let mut producer = Producer::new(vec![("a", 1), ("b", 2)].into_iter());
///
/// let first = resolve(&mut producer);
/// assert_eq!(first.len(), 2);
///
/// let second = resolve(&mut producer);
/// assert!(second.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Producer<I> {
    source: Option<I>,
}

impl<I> Producer<I> {
    /// Wraps an iterator of pairs.
    #[inline]
    pub const fn new(source: I) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Returns `true` once the producer has reported its end.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.source.is_none()
    }
}

impl<I: Iterator> Producer<Enumerate<I>> {
    /// Wraps an iterator of plain values, keying each by its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dryist::iterable::Producer;
    ///
    /// let pairs: Vec<(usize, char)> = Producer::list("ab".chars()).collect();
    /// assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
    /// ```
    #[inline]
    pub fn list(values: I) -> Self {
        Self::new(values.enumerate())
    }
}

impl<F> Producer<FromFn<F>> {
    /// Builds a producer from a closure that returns the next pair, or
    /// `None` to end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dryist::iterable::{Producer, count};
    ///
    /// let mut remaining = 3;
    /// let producer = Producer::from_fn(move || {
    ///     (remaining > 0).then(|| {
    ///         remaining -= 1;
    ///         (remaining, remaining * 10)
    ///     })
    /// });
    /// assert_eq!(count(producer), 3);
    /// ```
    #[inline]
    pub fn from_fn<K, V>(generate: F) -> Self
    where
        F: FnMut() -> Option<(K, V)>,
    {
        Self::new(std::iter::from_fn(generate))
    }
}

impl<I: Iterator> Iterator for Producer<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.as_mut()?.next();
        if item.is_none() {
            self.source = None;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedIterator for Producer<I> {}

impl<I, K, V> IntoKeyed for Producer<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
    type IntoSeq = Self;

    #[inline]
    fn into_keyed(self) -> Self {
        self
    }
}

impl<'a, I, K, V> IntoKeyed for &'a mut Producer<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
    type IntoSeq = Self;

    #[inline]
    fn into_keyed(self) -> Self {
        self
    }
}

/// Implements [`IntoKeyed`] as the identity conversion for adapter types
/// that are already keyed sequences.
macro_rules! impl_into_keyed_for_adapter {
    ($($adapter:ident<$($param:ident),*>),* $(,)?) => {
        $(
            impl<$($param),*> $crate::iterable::IntoKeyed for $adapter<$($param),*>
            where
                Self: $crate::iterable::KeyedSequence,
            {
                type Key = <Self as $crate::iterable::KeyedSequence>::Key;
                type Value = <Self as $crate::iterable::KeyedSequence>::Value;
                type IntoSeq = Self;

                #[inline]
                fn into_keyed(self) -> Self {
                    self
                }
            }
        )*
    };
}

pub(crate) use impl_into_keyed_for_adapter;

/// Most entries reserved up front from a size hint.
const PREALLOCATION_LIMIT: usize = 4096;

/// Capacity to reserve before draining a sequence with this size hint.
///
/// Infinite sources report a lower bound of `usize::MAX`, so the hint is
/// capped and storage grows on demand past the limit.
#[inline]
pub(crate) fn preallocation(size_hint: (usize, Option<usize>)) -> usize {
    size_hint.0.min(PREALLOCATION_LIMIT)
}
