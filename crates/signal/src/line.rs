//! Trend line payload handed to sinks.

use knox_divergence::Series;
use knox_types::{Divergence, DivergenceConfig, DivergenceStyle, DivergenceType};
use serde::{Deserialize, Serialize};

use crate::error::SignalError;

/// Segment from `(start_index, start_value)` to `(end_index, end_value)` on
/// the primary series, styled by divergence type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Deterministic divergence label, unique per drawn object
    pub label: String,
    /// Divergence type
    pub kind: DivergenceType,
    /// Start bar
    pub start_index: usize,
    /// Primary value at the start bar
    pub start_value: f64,
    /// End bar
    pub end_index: usize,
    /// Primary value at the end bar
    pub end_value: f64,
    /// Rendering style
    pub style: DivergenceStyle,
}

impl TrendLine {
    /// Builds the line for `divergence` from its endpoint values.
    #[must_use]
    pub fn new(
        divergence: &Divergence,
        start_value: f64,
        end_value: f64,
        style: DivergenceStyle,
    ) -> Self {
        Self {
            label: divergence.label(),
            kind: divergence.kind(),
            start_index: divergence.start_index(),
            start_value,
            end_index: divergence.end_index(),
            end_value,
            style,
        }
    }

    /// Reads the endpoints from `primary` and picks the style for the type.
    ///
    /// # Errors
    /// Returns `SignalError::Detection` if an endpoint lies past the end of
    /// `primary`.
    pub fn from_series<S: Series + ?Sized>(
        divergence: &Divergence,
        primary: &S,
        up_style: &DivergenceStyle,
        down_style: &DivergenceStyle,
    ) -> Result<Self, SignalError> {
        let style = match divergence.kind() {
            DivergenceType::Up => up_style,
            DivergenceType::Down => down_style,
        };
        Ok(Self::new(
            divergence,
            primary.at(divergence.start_index())?,
            primary.at(divergence.end_index())?,
            style.clone(),
        ))
    }

    /// Same as [`TrendLine::from_series`] with the styles of `config`.
    ///
    /// # Errors
    /// See [`TrendLine::from_series`].
    pub fn from_config<S: Series + ?Sized>(
        divergence: &Divergence,
        primary: &S,
        config: &DivergenceConfig,
    ) -> Result<Self, SignalError> {
        Self::from_series(divergence, primary, &config.up_style, &config.down_style)
    }

    /// Value change per bar along the line.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slope(&self) -> f64 {
        (self.end_value - self.start_value) / (self.end_index - self.start_index) as f64
    }
}
