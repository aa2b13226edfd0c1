//! # dryist
//!
//! Lazy, composable transformations over key/value sequences, plus a
//! handful of function combinators.
//!
//! ## Overview
//!
//! - **Iterables**: `map`, `map_key`, `map_both`, `filter`, `filter_key`,
//!   `take`, `combine`, `keys`, `values`, `count`, `resolve` over any
//!   keyed sequence (lists, ordered maps, open-ended producers)
//! - **Algebra**: `identity`, `always`, `compose`, `invert`
//! - **Tools**: `make`, `stringify`
//!
//! Every operator that returns a sequence is lazy: building a chain does no
//! work until something pulls from it.
//!
//! ## Feature Flags
//!
//! - `iterable`: Keyed sequence operators and [`OrderedMap`](iterable::OrderedMap)
//! - `algebra`: Function combinators
//! - `tool`: Construction and string coercion helpers
//! - `serde`: Serialization for `OrderedMap` and `Key`
//! - `fxhash` / `ahash`: Faster hashers for the `OrderedMap` index
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use dryist::prelude::*;
//!
//! let items = vec![0, 1, 2, 3, 4];
//! let evens = resolve(map(filter(&items, |value| *value % 2 == 0), |value| value * 10));
//!
//! assert_eq!(evens.get(&0), Some(&0));
//! assert_eq!(evens.get(&2), Some(&20));
//! assert_eq!(evens.get(&4), Some(&40));
//! assert_eq!(evens.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use dryist::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "iterable")]
    pub use crate::iterable::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "tool")]
    pub use crate::tool::*;
}

#[cfg(feature = "iterable")]
pub mod iterable;

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "tool")]
pub mod tool;
