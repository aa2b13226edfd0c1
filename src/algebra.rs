//! Function combinators.
//!
//! Small building blocks that are handy as callbacks for the
//! [`iterable`](crate::iterable) operators:
//!
//! - [`identity`] / [`id`]: returns its argument unchanged (I combinator)
//! - [`always`]: ignores its argument, returns a fixed value (K combinator)
//! - [`compose`]: right-to-left composition of two functions
//! - [`invert`]: negates a predicate
//!
//! # Laws
//!
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Double Inversion**: `invert(invert(p)) == p`

/// Returns the value unchanged.
///
/// The identity function is the unit element of [`compose`].
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use dryist::algebra::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use as a modifier
///
/// ```
/// use dryist::algebra::identity;
/// use dryist::iterable::{map, resolve};
///
/// assert_eq!(resolve(map(vec![1, 2], identity)), resolve(vec![1, 2]));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Alias of [`identity`].
#[inline]
pub fn id<T>(value: T) -> T {
    identity(value)
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use dryist::algebra::always;
///
/// let always_five = always::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
///
/// # Use with iterables
///
/// ```
/// use dryist::algebra::always;
/// use dryist::iterable::{map, values};
///
/// let zeros: Vec<i32> = values(map(vec![1, 2, 3], always(0))).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions right-to-left.
///
/// `compose(outer, inner)(x)` is `outer(inner(x))`.
///
/// # Examples
///
/// ```
/// use dryist::algebra::compose;
///
/// let shout = compose(|text: String| text + "!", |text: &str| text.to_uppercase());
/// assert_eq!(shout("hello"), "HELLO!");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |argument| outer(inner(argument))
}

/// Negates a predicate.
///
/// The returned predicate takes its argument by reference, which makes it a
/// drop-in argument for [`filter`](crate::iterable::filter) and
/// [`filter_key`](crate::iterable::filter_key).
///
/// # Examples
///
/// ```
/// use dryist::algebra::invert;
/// use dryist::iterable::{filter, values};
///
/// let is_even = |value: &i32| value % 2 == 0;
/// let odds: Vec<i32> = values(filter(vec![1, 2, 3, 4, 5], invert(is_even))).collect();
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
#[inline]
pub fn invert<A: ?Sized, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |argument| !predicate(argument)
}
