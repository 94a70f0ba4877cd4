#![allow(dead_code)]

/// Price falls one unit per bar into `trough`, then rises two per bar. The
/// oscillator rises into the trough and fades one unit per bar afterwards,
/// so evaluating late in the rise yields an up divergence starting at the
/// trough.
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

/// Oscillator readings for `len` bars, neutral except `reading` at `at`.
pub fn rsi_with(len: usize, at: usize, reading: f64) -> Vec<f64> {
    let mut rsi = vec![50.0; len];
    rsi[at] = reading;
    rsi
}
