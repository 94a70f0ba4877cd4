//! Extremum scanner: windowed maximum/minimum and local high/low tests.
//!
//! Empty ranges reduce to signed infinities, so a zero-width neighborhood
//! never constrains a local high/low test.

use crate::error::{DivergenceError, Result};
use crate::series::Series;

/// Maximum over the inclusive range `start..=end`.
///
/// Returns `f64::NEG_INFINITY` when `start > end` and NaN as soon as a NaN
/// value is in range, so a gap in the data fails every comparison against it.
///
/// # Errors
/// Returns [`DivergenceError::IndexOutOfRange`] if the range runs past the
/// end of the series.
pub fn maximum<S: Series + ?Sized>(series: &S, start: usize, end: usize) -> Result<f64> {
    let mut max = f64::NEG_INFINITY;
    for i in start..=end {
        let value = series.at(i)?;
        if value.is_nan() {
            return Ok(f64::NAN);
        }
        max = max.max(value);
    }
    Ok(max)
}

/// Minimum over the inclusive range `start..=end`.
///
/// Returns `f64::INFINITY` when `start > end` and NaN as soon as a NaN value
/// is in range.
///
/// # Errors
/// Returns [`DivergenceError::IndexOutOfRange`] if the range runs past the
/// end of the series.
pub fn minimum<S: Series + ?Sized>(series: &S, start: usize, end: usize) -> Result<f64> {
    let mut min = f64::INFINITY;
    for i in start..=end {
        let value = series.at(i)?;
        if value.is_nan() {
            return Ok(f64::NAN);
        }
        min = min.min(value);
    }
    Ok(min)
}

/// Neighborhood used to decide whether a bar is a local high or low.
///
/// `previous` bars before and `future` bars after the tested index are
/// compared against it. Ties count as extremes unless [`strict`] is set.
///
/// [`strict`]: LocalExtremum::strict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalExtremum {
    /// Bars before the tested index.
    pub previous: usize,
    /// Bars after the tested index.
    pub future: usize,
    /// Require a strict extreme (ties fail).
    pub strict: bool,
}

impl LocalExtremum {
    /// Backward-only, tie-inclusive neighborhood of `previous` bars.
    #[must_use]
    pub fn previous(previous: usize) -> Self {
        Self {
            previous,
            future: 0,
            strict: false,
        }
    }

    /// Also compares against `future` bars after the tested index.
    #[must_use]
    pub fn with_future(mut self, future: usize) -> Self {
        self.future = future;
        self
    }

    /// Ties with the neighborhood no longer count as extremes.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Whether the value at `index` is a high within the neighborhood.
    ///
    /// # Errors
    /// Returns [`DivergenceError::NotEnoughHistory`] if `previous` reaches
    /// before bar 0 and [`DivergenceError::IndexOutOfRange`] if the index or
    /// the `future` bars run past the end of the series.
    pub fn is_high<S: Series + ?Sized>(&self, series: &S, index: usize) -> Result<bool> {
        let value = series.at(index)?;
        let (before, after) = self.bounds(series, index, maximum::<S>, f64::NEG_INFINITY)?;

        Ok(if self.strict {
            value > before && value > after
        } else {
            value >= before && value >= after
        })
    }

    /// Whether the value at `index` is a low within the neighborhood.
    ///
    /// # Errors
    /// Same as [`LocalExtremum::is_high`].
    pub fn is_low<S: Series + ?Sized>(&self, series: &S, index: usize) -> Result<bool> {
        let value = series.at(index)?;
        let (before, after) = self.bounds(series, index, minimum::<S>, f64::INFINITY)?;

        Ok(if self.strict {
            value < before && value < after
        } else {
            value <= before && value <= after
        })
    }

    /// Reduces the bars on each side of `index`, `empty` for a zero count.
    fn bounds<S, F>(&self, series: &S, index: usize, reduce: F, empty: f64) -> Result<(f64, f64)>
    where
        S: Series + ?Sized,
        F: Fn(&S, usize, usize) -> Result<f64>,
    {
        let before = if self.previous > 0 {
            let first = index
                .checked_sub(self.previous)
                .ok_or(DivergenceError::NotEnoughHistory {
                    index,
                    required: self.previous,
                })?;
            reduce(series, first, index - 1)?
        } else {
            empty
        };

        let after = if self.future > 0 {
            let last = index.saturating_add(self.future);
            reduce(series, index + 1, last)?
        } else {
            empty
        };

        Ok((before, after))
    }
}

/// Whether `series[index]` is at or above (strictly above when `equal` is
/// false) the `previous` bars before it and the `future` bars after it.
///
/// # Errors
/// See [`LocalExtremum::is_high`].
pub fn is_higher<S: Series + ?Sized>(
    series: &S,
    index: usize,
    previous: usize,
    future: usize,
    equal: bool,
) -> Result<bool> {
    let mut window = LocalExtremum::previous(previous).with_future(future);
    window.strict = !equal;
    window.is_high(series, index)
}

/// Whether `series[index]` is at or below (strictly below when `equal` is
/// false) the `previous` bars before it and the `future` bars after it.
///
/// # Errors
/// See [`LocalExtremum::is_low`].
pub fn is_lower<S: Series + ?Sized>(
    series: &S,
    index: usize,
    previous: usize,
    future: usize,
    equal: bool,
) -> Result<bool> {
    let mut window = LocalExtremum::previous(previous).with_future(future);
    window.strict = !equal;
    window.is_low(series, index)
}
