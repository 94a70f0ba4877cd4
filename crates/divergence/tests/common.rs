#![allow(dead_code)]

use proptest::prelude::*;

/// Price falls one unit per bar down to `trough`, then rises two units per
/// bar up to `end`. The oscillator rises into the trough and fades one unit
/// per bar afterwards.
pub fn trough_then_rise(trough: i32, end: i32) -> (Vec<f64>, Vec<f64>) {
    let primary = (0..=end)
        .map(|i| {
            if i <= trough {
                100.0 - f64::from(i)
            } else {
                100.0 - f64::from(trough) + 2.0 * f64::from(i - trough)
            }
        })
        .collect();
    let secondary = (0..=end)
        .map(|i| {
            if i <= trough {
                50.0 + f64::from(i)
            } else {
                50.0 + f64::from(trough) - f64::from(i - trough)
            }
        })
        .collect();
    (primary, secondary)
}

/// Mirror of [`trough_then_rise`]: price peaks at `peak` and falls, the
/// oscillator bottoms at `peak` and recovers.
pub fn peak_then_fall(peak: i32, end: i32) -> (Vec<f64>, Vec<f64>) {
    let (primary, secondary) = trough_then_rise(peak, end);
    (
        primary.iter().map(|v| 200.0 - v).collect(),
        secondary.iter().map(|v| 200.0 - v).collect(),
    )
}

/// `intercept + step * i` with integer parameters, exact in `f64`.
pub fn linear(len: usize, intercept: i32, step: i32) -> Vec<f64> {
    (0..len)
        .map(|i| f64::from(intercept) + f64::from(step) * i as f64)
        .collect()
}

/// Random walk with integer increments, so slopes stay exact enough to make
/// results reproducible.
pub fn integer_walk(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-5i32..=5, len..=len).prop_map(|steps| {
        let mut level = 1_000.0;
        steps
            .into_iter()
            .map(|step| {
                level += f64::from(step);
                level
            })
            .collect()
    })
}
