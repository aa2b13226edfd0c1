//! Tagged keys for sequences that mix integer and string keys.

use std::fmt;

/// A key that is either an integer or a string.
///
/// Equality is strict: the tag and the payload must both match, so
/// `Key::Int(1)` and `Key::Str("1")` are different keys. This is what
/// [`take`](super::take) relies on when restricting a sequence to a key set.
///
/// Integer keys order before string keys.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::Key;
///
/// assert_eq!(Key::from(1), Key::Int(1));
/// assert_eq!(Key::from("1"), Key::Str("1".to_string()));
/// assert_ne!(Key::from(1), Key::from("1"));
/// assert!(Key::from(99) < Key::from("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    /// An integer key.
    Int(i64),
    /// A string key.
    Str(String),
}

impl Key {
    /// Returns `true` if this is an integer key.
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is a string key.
    #[inline]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns the integer payload, if any.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    /// Returns the string payload, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(value) => Some(value),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
        }
    }
}

static_assertions::assert_impl_all!(Key: Send, Sync, Clone, std::hash::Hash, Ord);
