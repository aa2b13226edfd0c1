//! Pairing an independent key source with a value source.

use std::iter::{FusedIterator, Zip};
use std::vec::IntoIter;

use super::sequence::{impl_into_keyed_for_adapter, preallocation};
use super::{ArgumentError, IntoKeyed, KeyedSequence};

/// Combines the values of `keys` with the values of `values` into one keyed
/// sequence.
///
/// Both sources are drained before anything is returned so that a length
/// mismatch is reported up front. The keys of both sources are discarded:
/// the `i`-th value of `keys` becomes the key of the `i`-th value of
/// `values`. Two empty sources combine into an empty sequence.
///
/// # Errors
///
/// Returns [`ArgumentError::CountMismatch`] when the sources yield a
/// different number of items.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{combine, resolve};
///
/// let combined = resolve(combine(vec!["a", "b", "c"], vec![1, 2, 3]).unwrap());
/// let entries: Vec<(&&str, &i32)> = combined.iter().collect();
/// assert_eq!(entries, vec![(&"a", &1), (&"b", &2), (&"c", &3)]);
///
/// assert!(combine(vec![1, 2, 3], vec!["x"]).is_err());
/// ```
pub fn combine<KS, VS>(
    keys: KS,
    values: VS,
) -> Result<Combine<KS::Value, VS::Value>, ArgumentError>
where
    KS: IntoKeyed,
    VS: IntoKeyed,
{
    let keys = drain_values(keys);
    let values = drain_values(values);

    if keys.len() != values.len() {
        return Err(ArgumentError::CountMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    Ok(Combine {
        pairs: keys.into_iter().zip(values),
    })
}

fn drain_values<S: IntoKeyed>(items: S) -> Vec<S::Value> {
    let mut sequence = items.into_keyed();
    let mut drained = Vec::with_capacity(preallocation(sequence.size_hint()));
    while let Some((_, value)) = sequence.next_pair() {
        drained.push(value);
    }
    drained
}

/// Sequence returned by [`combine`].
///
/// Holds both validated sources in memory and hands out their pairs in
/// order.
#[must_use = "sequences are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Combine<K, V> {
    pairs: Zip<IntoIter<K>, IntoIter<V>>,
}

impl<K, V> Iterator for Combine<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Combine<K, V> {}

impl<K, V> FusedIterator for Combine<K, V> {}

impl_into_keyed_for_adapter!(Combine<K, V>);
