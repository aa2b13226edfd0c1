//! Construction and string coercion helpers.
//!
//! - [`make`]: a modifier that builds a value of a chosen type from its input
//! - [`stringify`]: string representation that leaves `None` alone

use std::fmt::Display;

/// Creates a modifier that constructs a `T` from its argument.
///
/// The target type is chosen with a turbofish, and construction goes
/// through `T`'s [`From`] implementation.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
///
/// use dryist::iterable::{map, resolve};
/// use dryist::tool::make;
///
/// let queues = resolve(map(vec![vec![1, 2, 3]], make::<VecDeque<i32>, _>()));
/// assert_eq!(queues.len(), 1);
/// assert_eq!(queues[&0].len(), 3);
/// assert_eq!(queues[&0].front(), Some(&1));
/// ```
#[inline]
pub fn make<T, A>() -> impl Fn(A) -> T
where
    T: From<A>,
{
    <T as From<A>>::from
}

/// Returns the string representation of a value, passing `None` through.
///
/// # Examples
///
/// ```
/// use dryist::tool::stringify;
///
/// assert_eq!(stringify(Some(42)), Some("42".to_string()));
/// assert_eq!(stringify(None::<i32>), None);
/// ```
#[inline]
pub fn stringify<T: Display>(value: Option<T>) -> Option<String> {
    value.map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Celsius(f64);

    impl From<f64> for Celsius {
        fn from(degrees: f64) -> Self {
            Self(degrees)
        }
    }

    #[test]
    fn test_make_uses_from() {
        let build = make::<Celsius, f64>();
        assert_eq!(build(21.5), Celsius(21.5));
    }

    #[test]
    fn test_stringify_keeps_empty_string() {
        assert_eq!(stringify(Some("")), Some(String::new()));
    }
}
