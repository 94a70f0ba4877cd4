//! Confirmation filters

use knox_divergence::Series;
use knox_types::{Divergence, DivergenceConfig, DivergenceType};

use crate::traits::ConfirmationFilter;

/// Accepts every divergence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ConfirmationFilter for AcceptAll {
    fn accept(&self, _divergence: &Divergence, _eval_index: usize) -> bool {
        true
    }

    fn name(&self) -> &str {
        "accept_all"
    }
}

/// Oscillator gate over a pre-computed RSI series.
///
/// An up divergence is dropped when the RSI at the evaluated bar is above
/// `oversold`, a down divergence when it is below `overbought`. A NaN reading
/// fails both comparisons and lets the divergence through. A bar past the end
/// of the RSI series has no reading at all and is rejected.
#[derive(Debug, Clone)]
pub struct RsiThresholdGate<S> {
    rsi: S,
    /// Down divergences need the RSI at or above this level
    pub overbought: f64,
    /// Up divergences need the RSI at or below this level
    pub oversold: f64,
}

impl<S: Series> RsiThresholdGate<S> {
    /// Creates a gate over `rsi` with the given levels.
    pub fn new(rsi: S, overbought: f64, oversold: f64) -> Self {
        Self {
            rsi,
            overbought,
            oversold,
        }
    }

    /// Creates a gate with the configured levels.
    pub fn from_config(rsi: S, config: &DivergenceConfig) -> Self {
        Self::new(rsi, config.rsi_overbought, config.rsi_oversold)
    }

    /// The RSI series the gate reads.
    pub fn rsi(&self) -> &S {
        &self.rsi
    }

    /// Mutable access, for hosts appending RSI values bar by bar.
    pub fn rsi_mut(&mut self) -> &mut S {
        &mut self.rsi
    }
}

impl<S: Series + Send + Sync> ConfirmationFilter for RsiThresholdGate<S> {
    fn accept(&self, divergence: &Divergence, eval_index: usize) -> bool {
        let Some(rsi) = self.rsi.value(eval_index) else {
            return false;
        };

        let kind = divergence.kind();
        let skip = (kind == DivergenceType::Up && rsi > self.oversold)
            || (kind == DivergenceType::Down && rsi < self.overbought);
        !skip
    }

    fn name(&self) -> &str {
        "rsi_threshold"
    }
}
