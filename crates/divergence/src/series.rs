//! Read-only access to a bar-indexed numeric series.

use std::collections::VecDeque;

use crate::error::{DivergenceError, Result};

/// Ordered numeric sequence indexed by bar position (0 is the oldest bar).
///
/// The detector only reads through this trait and never mutates a series.
/// Implemented for slices, `Vec<f64>`, `VecDeque<f64>` and references to any
/// implementor, so a host can pass whatever buffer it appends bars to.
pub trait Series {
    /// Number of bars available.
    fn len(&self) -> usize;

    /// Value at `index`, `None` past the end.
    fn value(&self, index: usize) -> Option<f64>;

    /// Returns true when the series holds no bars.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`.
    ///
    /// # Errors
    /// Returns [`DivergenceError::IndexOutOfRange`] past the end.
    fn at(&self, index: usize) -> Result<f64> {
        self.value(index).ok_or(DivergenceError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

impl Series for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl Series for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl Series for VecDeque<f64> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl<S: Series + ?Sized> Series for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        (**self).value(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<S: Series + ?Sized>(series: &S) -> f64 {
        (0..series.len()).filter_map(|i| series.value(i)).sum()
    }

    #[test]
    fn test_slice_and_vec_agree() {
        let values = vec![1.0, 2.5, 4.0];
        assert_eq!(Series::len(&values), 3);
        assert!((total(&values) - 7.5).abs() < 1e-10);
        assert!((total(values.as_slice()) - 7.5).abs() < 1e-10);
    }

    #[test]
    fn test_deque_is_appendable() {
        let mut bars: VecDeque<f64> = VecDeque::new();
        assert!(Series::is_empty(&bars));
        bars.push_back(3.0);
        bars.push_back(4.0);
        assert_eq!(bars.value(1), Some(4.0));
        assert_eq!(Series::len(&bars), 2);
    }

    #[test]
    fn test_at_past_end() {
        let values = [1.0, 2.0];
        assert!((values.as_slice().at(1).unwrap() - 2.0).abs() < 1e-10);
        assert!(matches!(
            values.as_slice().at(2),
            Err(DivergenceError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_reference_forwards() {
        let values = vec![9.0, 8.0];
        let by_ref = &values;
        assert_eq!(Series::value(&by_ref, 0), Some(9.0));
    }
}
