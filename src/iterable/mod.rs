//! Lazy operators over keyed sequences.
//!
//! A keyed sequence is an ordered, single-pass production of `(key, value)`
//! pairs. Any `Iterator<Item = (K, V)>` is one. Concrete sources are bridged
//! in through [`IntoKeyed`]:
//!
//! - `Vec<V>`, `[V; N]`, `&[V]`, `&Vec<V>`: keys are 0-based positions
//! - [`OrderedMap<K, V>`] and `&OrderedMap<K, V>`: keys as stored
//! - [`Producer<I>`]: an open-ended, possibly infinite source
//!
//! # Operators
//!
//! | Operator       | Output                          | Lazy |
//! |----------------|---------------------------------|------|
//! | [`map`]        | `(k, f(v))`                     | yes  |
//! | [`map_key`]    | `(f(k), v)`                     | yes  |
//! | [`map_both`]   | `(k, f(&k, v))`                 | yes  |
//! | [`filter`]     | pairs where `p(&v)`             | yes  |
//! | [`filter_key`] | pairs where `p(&k)`             | yes  |
//! | [`take`]       | pairs whose key is listed       | yes  |
//! | [`keys`]       | `k`                             | yes  |
//! | [`values`]     | `v`                             | yes  |
//! | [`combine`]    | `(k_i, v_i)`                    | no   |
//! | [`count`]      | `usize`                         | no   |
//! | [`resolve`]    | [`OrderedMap`]                  | no   |
//!
//! The output of `keys` and `values` is re-keyed by position when passed to
//! another operator, so `resolve(keys(items))` is a list of keys.
//!
//! `combine` traverses both inputs before producing anything so that a
//! length mismatch is reported up front. `count` and `resolve` never
//! terminate on an infinite source.
//!
//! # Single-pass sources
//!
//! Concrete sources can be traversed again by borrowing them again. A
//! [`Producer`] cannot: once drained it stays empty.
//!
//! ```rust
//! use dryist::iterable::{Producer, count};
//!
//! let list = vec![1, 2, 3];
//! assert_eq!(count(&list), 3);
//! assert_eq!(count(&list), 3);
//!
//! let mut producer = Producer::list(1..=3);
//! assert_eq!(count(&mut producer), 3);
//! assert_eq!(count(&mut producer), 0);
//! assert!(producer.is_exhausted());
//! ```
//!
//! # Laziness
//!
//! ```rust
//! use dryist::iterable::{Producer, filter, map};
//!
//! let naturals = Producer::list(0_u64..);
//! let chain = map(filter(naturals, |value| value % 3 == 0), |value| value * 2);
//!
//! let prefix: Vec<(usize, u64)> = chain.take(3).collect();
//! assert_eq!(prefix, vec![(0, 0), (3, 6), (6, 12)]);
//! ```

mod combine;
mod error;
mod ext;
mod filter;
mod key;
mod ordered_map;
mod projection;
mod sequence;
mod transform;

pub use combine::{Combine, combine};
pub use error::ArgumentError;
pub use ext::KeyedSequenceExt;
pub use filter::{Filter, FilterKey, Take, filter, filter_key, take};
pub use key::Key;
pub use ordered_map::{OrderedMap, OrderedMapIntoIterator, OrderedMapIterator};
pub use projection::{Keys, Values, count, keys, resolve, try_count, try_resolve, values};
pub use sequence::{IntoKeyed, KeyedSequence, Producer};
pub use transform::{Map, MapBoth, MapKey, map, map_both, map_key};
