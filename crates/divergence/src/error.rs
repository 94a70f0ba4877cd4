//! Divergence detection error types.

use knox_types::CoreError;
use thiserror::Error;

/// Result alias for detector operations.
pub type Result<T> = std::result::Result<T, DivergenceError>;

/// Errors raised by the detector.
#[derive(Debug, Error)]
pub enum DivergenceError {
    /// Pairwise operation called with `start >= end`
    #[error("invalid range: start index {start} must be less than end index {end}")]
    InvalidRange {
        /// Start index.
        start: usize,
        /// End index.
        end: usize,
    },

    /// Index past the end of a series
    #[error("index out of range: {index} (series length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Series length.
        len: usize,
    },

    /// Neighborhood reaches before the first bar
    #[error("not enough history: index {index} has fewer than {required} preceding bars")]
    NotEnoughHistory {
        /// Index being tested.
        index: usize,
        /// Number of preceding bars requested.
        required: usize,
    },

    /// Secondary series does not cover the evaluated bar
    #[error("length mismatch: primary has {primary} values, secondary has {secondary}")]
    LengthMismatch {
        /// Primary series length.
        primary: usize,
        /// Secondary series length.
        secondary: usize,
    },

    /// Error from the core types
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Fails with [`DivergenceError::InvalidRange`] unless `start < end`.
pub(crate) fn ensure_range(start: usize, end: usize) -> Result<()> {
    if start >= end {
        return Err(DivergenceError::InvalidRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_range() {
        assert!(ensure_range(0, 1).is_ok());
        assert!(matches!(
            ensure_range(5, 5),
            Err(DivergenceError::InvalidRange { start: 5, end: 5 })
        ));
        assert!(ensure_range(7, 2).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DivergenceError::IndexOutOfRange { index: 12, len: 10 };
        assert_eq!(err.to_string(), "index out of range: 12 (series length 10)");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: DivergenceError = CoreError::InvalidRange { start: 3, end: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid range: start index 3 must be less than end index 1"
        );
    }
}
