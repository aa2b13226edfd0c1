//! Error types for keyed sequence operators.
//!
//! Only [`combine`](super::combine) validates its arguments. Every other
//! operator relays whatever its source or callback does, unchanged.

/// Represents a precondition violation detected before any output is
/// produced.
///
/// # Examples
///
/// ```rust
/// use dryist::iterable::{ArgumentError, combine};
///
/// let error = combine(vec![1, 2, 3], vec!["x"]).unwrap_err();
/// assert_eq!(error, ArgumentError::CountMismatch { keys: 3, values: 1 });
/// assert_eq!(
///     format!("{error}"),
///     "combine: count mismatch (3 keys, 1 values)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The key and value sources produced a different number of items.
    CountMismatch {
        /// Number of items produced by the key source.
        keys: usize,
        /// Number of items produced by the value source.
        values: usize,
    },
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch { keys, values } => write!(
                formatter,
                "combine: count mismatch ({keys} keys, {values} values)"
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mismatch_display() {
        let error = ArgumentError::CountMismatch { keys: 0, values: 2 };
        assert_eq!(
            format!("{error}"),
            "combine: count mismatch (0 keys, 2 values)"
        );
    }

    #[test]
    fn test_count_mismatch_equality() {
        let error1 = ArgumentError::CountMismatch { keys: 1, values: 2 };
        let error2 = ArgumentError::CountMismatch { keys: 1, values: 2 };
        let error3 = ArgumentError::CountMismatch { keys: 2, values: 1 };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_argument_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(ArgumentError::CountMismatch { keys: 3, values: 1 });
        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "combine: count mismatch (3 keys, 1 values)"
        );
    }
}
