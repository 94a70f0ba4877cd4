//! Window scanner: every divergence ending at an evaluated bar.

use std::ops::RangeInclusive;

use knox_types::{Divergence, DivergenceConfig};

use crate::classifier::classify;
use crate::error::{DivergenceError, Result};
use crate::series::Series;

/// Finds all divergences between `primary` and `secondary` that end at
/// `eval_index`.
///
/// Candidate starts run from `eval_index - min_distance` down to
/// `eval_index - lookback_periods`; the result keeps that order, most recent
/// start first. `min_distance` is also the neighborhood a start has to be a
/// local low (up) or high (down) against. Candidates with fewer than
/// `min_distance` bars of history can never qualify and are not visited. An
/// empty candidate range yields an empty list.
///
/// # Errors
/// Returns [`DivergenceError::IndexOutOfRange`] when `eval_index` is past the
/// end of `primary` and [`DivergenceError::LengthMismatch`] when `secondary`
/// does not reach `eval_index`.
pub fn detect_divergences<P, Q>(
    primary: &P,
    secondary: &Q,
    eval_index: usize,
    lookback_periods: usize,
    min_distance: usize,
) -> Result<Vec<Divergence>>
where
    P: Series + ?Sized,
    Q: Series + ?Sized,
{
    primary.at(eval_index)?;
    if secondary.len() <= eval_index {
        return Err(DivergenceError::LengthMismatch {
            primary: primary.len(),
            secondary: secondary.len(),
        });
    }

    let Some(candidates) = candidate_starts(eval_index, lookback_periods, min_distance) else {
        tracing::trace!(eval_index, lookback_periods, min_distance, "empty candidate range");
        return Ok(Vec::new());
    };

    let mut result = Vec::new();
    for start in candidates.clone().rev() {
        if let Some(divergence) = classify(primary, secondary, start, eval_index, min_distance)? {
            tracing::trace!(
                label = %divergence.label(),
                bars = divergence.bars_in_between(),
                "divergence found"
            );
            result.push(divergence);
        }
    }

    tracing::debug!(
        "Scanned bar {}: starts {}..={}, {} divergence(s)",
        eval_index,
        candidates.start(),
        candidates.end(),
        result.len()
    );

    Ok(result)
}

/// Inclusive range of start indices worth classifying, `None` when empty.
fn candidate_starts(
    eval_index: usize,
    lookback_periods: usize,
    min_distance: usize,
) -> Option<RangeInclusive<usize>> {
    let newest = eval_index.checked_sub(min_distance.max(1))?;
    let oldest = eval_index.saturating_sub(lookback_periods).max(min_distance);
    (oldest <= newest).then_some(oldest..=newest)
}

/// Divergence detector with a fixed lookback window and minimum distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivergenceDetector {
    /// How many bars back a divergence may start
    pub lookback_periods: usize,
    /// Minimum bars between start and end, and the local-extremum neighborhood
    pub min_distance: usize,
}

impl DivergenceDetector {
    /// Creates a detector with the given window.
    #[must_use]
    pub fn new(lookback_periods: usize, min_distance: usize) -> Self {
        Self {
            lookback_periods,
            min_distance,
        }
    }

    /// Creates a detector from a validated configuration.
    ///
    /// # Errors
    /// Returns the configuration's validation error.
    pub fn from_config(config: &DivergenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.lookback_periods, config.min_distance))
    }

    /// First bar with a full lookback window behind it.
    #[must_use]
    pub fn warmup_periods(&self) -> usize {
        self.lookback_periods + 1
    }

    /// Runs [`detect_divergences`] with this detector's window.
    ///
    /// # Errors
    /// See [`detect_divergences`].
    pub fn detect<P, Q>(&self, primary: &P, secondary: &Q, eval_index: usize) -> Result<Vec<Divergence>>
    where
        P: Series + ?Sized,
        Q: Series + ?Sized,
    {
        detect_divergences(
            primary,
            secondary,
            eval_index,
            self.lookback_periods,
            self.min_distance,
        )
    }
}

impl Default for DivergenceDetector {
    fn default() -> Self {
        let config = DivergenceConfig::default();
        Self::new(config.lookback_periods, config.min_distance)
    }
}
