//! Trend validity checker.
//!
//! A divergence leg is drawn as a straight line between two bars. The leg is
//! only valid if the series never crosses that line in between.

use knox_types::Direction;

use crate::error::{Result, ensure_range};
use crate::series::Series;

/// Slope of the straight line through `series[start]` and `series[end]`,
/// in value units per bar.
///
/// # Errors
/// Returns [`DivergenceError::InvalidRange`] when `start >= end` and
/// [`DivergenceError::IndexOutOfRange`] past the end of the series.
///
/// [`DivergenceError::InvalidRange`]: crate::DivergenceError::InvalidRange
/// [`DivergenceError::IndexOutOfRange`]: crate::DivergenceError::IndexOutOfRange
#[allow(clippy::cast_precision_loss)]
pub fn slope<S: Series + ?Sized>(series: &S, start: usize, end: usize) -> Result<f64> {
    ensure_range(start, end)?;
    let first = series.at(start)?;
    let last = series.at(end)?;
    Ok((last - first) / (end - start) as f64)
}

/// Whether the line from `start` to `end` can be drawn without the series
/// crossing it.
///
/// Every bar in `start + 1..=end` is compared with the line's value at that
/// bar. [`Direction::Up`] fails as soon as a bar lies below the line,
/// [`Direction::Down`] as soon as one lies above it. [`Direction::None`]
/// never fails.
///
/// # Errors
/// Returns [`DivergenceError::InvalidRange`] when `start >= end` and
/// [`DivergenceError::IndexOutOfRange`] past the end of the series.
///
/// [`DivergenceError::InvalidRange`]: crate::DivergenceError::InvalidRange
/// [`DivergenceError::IndexOutOfRange`]: crate::DivergenceError::IndexOutOfRange
#[allow(clippy::cast_precision_loss)]
pub fn is_connection_possible<S: Series + ?Sized>(
    series: &S,
    start: usize,
    end: usize,
    direction: Direction,
) -> Result<bool> {
    let slope = slope(series, start, end)?;
    let origin = series.at(start)?;

    for index in start + 1..=end {
        let expected = origin + slope * (index - start) as f64;
        let value = series.at(index)?;

        let crossed = match direction {
            Direction::Up => value < expected,
            Direction::Down => value > expected,
            Direction::None => false,
        };
        if crossed {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DivergenceError;

    fn linear(len: usize, intercept: f64, step: f64) -> Vec<f64> {
        (0..len)
            .map(|i| intercept + step * i as f64)
            .collect()
    }

    #[test]
    fn test_slope() {
        let values = [10.0, 12.0, 11.0, 16.0];
        assert!((slope(&values[..], 0, 3).unwrap() - 2.0).abs() < 1e-10);
        assert!((slope(&values[..], 1, 2).unwrap() + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_linear_series_connects_both_ways() {
        for step in [-3.0, -0.5, 0.0, 0.25, 4.0] {
            let values = linear(12, 50.0, step);
            assert!(is_connection_possible(&values, 0, 11, Direction::Up).unwrap());
            assert!(is_connection_possible(&values, 0, 11, Direction::Down).unwrap());
            assert!(is_connection_possible(&values, 3, 8, Direction::Up).unwrap());
            assert!(is_connection_possible(&values, 3, 8, Direction::Down).unwrap());
        }
    }

    #[test]
    fn test_dip_below_line_breaks_up() {
        let mut values = linear(10, 20.0, 1.0);
        values[5] -= 1e-9;
        assert!(!is_connection_possible(&values, 0, 9, Direction::Up).unwrap());
        assert!(is_connection_possible(&values, 0, 9, Direction::Down).unwrap());
    }

    #[test]
    fn test_spike_above_line_breaks_down() {
        let mut values = linear(10, 20.0, -1.0);
        values[4] += 1e-9;
        assert!(!is_connection_possible(&values, 0, 9, Direction::Down).unwrap());
        assert!(is_connection_possible(&values, 0, 9, Direction::Up).unwrap());
    }

    #[test]
    fn test_violation_outside_range_is_ignored() {
        let mut values = linear(10, 0.0, 1.0);
        values[1] = -100.0;
        assert!(is_connection_possible(&values, 2, 9, Direction::Up).unwrap());
    }

    #[test]
    fn test_direction_none_always_connects() {
        let values = [1.0, 9.0, -4.0, 2.0];
        assert!(is_connection_possible(&values[..], 0, 3, Direction::None).unwrap());
    }

    #[test]
    fn test_adjacent_bars_always_connect() {
        let values = [3.0, -7.0];
        assert!(is_connection_possible(&values[..], 0, 1, Direction::Up).unwrap());
        assert!(is_connection_possible(&values[..], 0, 1, Direction::Down).unwrap());
    }

    #[test]
    fn test_empty_range_rejected() {
        let values = linear(10, 0.0, 1.0);
        assert!(matches!(
            is_connection_possible(&values, 5, 5, Direction::Up),
            Err(DivergenceError::InvalidRange { start: 5, end: 5 })
        ));
        assert!(matches!(
            slope(&values, 6, 2),
            Err(DivergenceError::InvalidRange { start: 6, end: 2 })
        ));
    }

    #[test]
    fn test_end_past_series_rejected() {
        let values = linear(4, 0.0, 1.0);
        assert!(matches!(
            is_connection_possible(&values, 0, 4, Direction::Up),
            Err(DivergenceError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }
}
