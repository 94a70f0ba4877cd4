//! Runner that drives detection for a host, one bar at a time or over a
//! whole history.

use knox_divergence::{DivergenceDetector, Series};
use knox_types::{DivergenceConfig, DivergenceStyle};

use crate::error::SignalError;
use crate::line::TrendLine;
use crate::traits::{ConfirmationFilter, DivergenceSink};

/// What happened on one evaluated bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOutcome {
    /// Not enough history behind the bar yet; nothing was scanned.
    Warmup,
    /// The bar was scanned.
    Scanned {
        /// Divergences the detector reported
        found: usize,
        /// Divergences the filter accepted and the sink received
        accepted: usize,
    },
}

impl BarOutcome {
    /// Number of divergences handed to the sink.
    #[must_use]
    pub fn accepted(&self) -> usize {
        match self {
            Self::Warmup => 0,
            Self::Scanned { accepted, .. } => *accepted,
        }
    }
}

/// Totals of a [`DivergenceRunner::run_all`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Bars scanned, warmup excluded
    pub bars: usize,
    /// Divergences found over all bars
    pub found: usize,
    /// Divergences accepted over all bars
    pub accepted: usize,
}

/// Detector plus confirmation filter plus line styles.
///
/// The runner never stores series data; hosts pass the current series on
/// every call, so it works the same on a growing buffer and on a complete
/// history.
#[derive(Debug, Clone)]
pub struct DivergenceRunner<F> {
    detector: DivergenceDetector,
    filter: F,
    up_style: DivergenceStyle,
    down_style: DivergenceStyle,
}

impl<F: ConfirmationFilter> DivergenceRunner<F> {
    /// Creates a runner with the default line styles.
    pub fn new(detector: DivergenceDetector, filter: F) -> Self {
        Self {
            detector,
            filter,
            up_style: DivergenceStyle::default_up(),
            down_style: DivergenceStyle::default_down(),
        }
    }

    /// Creates a runner from a configuration, validating it first.
    ///
    /// # Errors
    /// Returns `SignalError::Config` if the configuration is invalid.
    pub fn from_config(config: &DivergenceConfig, filter: F) -> Result<Self, SignalError> {
        config.validate()?;
        Ok(Self {
            detector: DivergenceDetector::new(config.lookback_periods, config.min_distance),
            filter,
            up_style: config.up_style.clone(),
            down_style: config.down_style.clone(),
        })
    }

    /// Replaces the line styles.
    #[must_use]
    pub fn with_styles(mut self, up_style: DivergenceStyle, down_style: DivergenceStyle) -> Self {
        self.up_style = up_style;
        self.down_style = down_style;
        self
    }

    /// The underlying detector.
    pub fn detector(&self) -> &DivergenceDetector {
        &self.detector
    }

    /// The confirmation filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Mutable access to the filter, e.g. to append oscillator readings.
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Evaluates bar `index`.
    ///
    /// Bars with at most `lookback_periods` bars of history are skipped. On
    /// every other bar each detected divergence is offered to the filter, and
    /// the accepted ones reach `sink` with their trend line, most recent start
    /// first.
    ///
    /// # Errors
    /// Returns `SignalError::Detection` if either series does not reach
    /// `index`.
    pub fn on_bar<P, Q, K>(
        &self,
        primary: &P,
        secondary: &Q,
        index: usize,
        sink: &mut K,
    ) -> Result<BarOutcome, SignalError>
    where
        P: Series + ?Sized,
        Q: Series + ?Sized,
        K: DivergenceSink + ?Sized,
    {
        if index <= self.detector.lookback_periods {
            tracing::debug!(
                "Skipping bar {}: warmup needs {} bars",
                index,
                self.detector.warmup_periods()
            );
            return Ok(BarOutcome::Warmup);
        }

        let divergences = self.detector.detect(primary, secondary, index)?;
        let mut accepted = 0;
        for divergence in &divergences {
            if !self.filter.accept(divergence, index) {
                tracing::debug!(
                    label = %divergence.label(),
                    filter = self.filter.name(),
                    "divergence rejected"
                );
                continue;
            }

            let line =
                TrendLine::from_series(divergence, primary, &self.up_style, &self.down_style)?;
            tracing::debug!(
                label = %divergence.label(),
                filter = self.filter.name(),
                "divergence accepted"
            );
            sink.on_divergence(divergence, &line);
            accepted += 1;
        }

        Ok(BarOutcome::Scanned {
            found: divergences.len(),
            accepted,
        })
    }

    /// Evaluates every bar both series cover, warmup bars excluded.
    ///
    /// # Errors
    /// See [`DivergenceRunner::on_bar`].
    pub fn run_all<P, Q, K>(
        &self,
        primary: &P,
        secondary: &Q,
        sink: &mut K,
    ) -> Result<RunSummary, SignalError>
    where
        P: Series + ?Sized,
        Q: Series + ?Sized,
        K: DivergenceSink + ?Sized,
    {
        let len = primary.len().min(secondary.len());
        let mut summary = RunSummary::default();

        for index in self.detector.warmup_periods()..len {
            if let BarOutcome::Scanned { found, accepted } =
                self.on_bar(primary, secondary, index, sink)?
            {
                summary.bars += 1;
                summary.found += found;
                summary.accepted += accepted;
            }
        }

        tracing::info!(
            "Divergence run over {} bars: {} found, {} accepted by {}",
            summary.bars,
            summary.found,
            summary.accepted,
            self.filter.name()
        );

        Ok(summary)
    }
}
