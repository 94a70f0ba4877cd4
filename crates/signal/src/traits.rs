//! Consumer traits
//!
//! The detector only emits candidates. Deciding which ones count and what to
//! do with them is up to a [`ConfirmationFilter`] and a [`DivergenceSink`].

use knox_types::Divergence;

use crate::line::TrendLine;

/// Decides whether a detected divergence is confirmed.
///
/// # Thread Safety
/// Filters must be `Send + Sync` so one runner can serve several threads.
///
/// # Example
/// ```ignore
/// struct LongOnly;
///
/// impl ConfirmationFilter for LongOnly {
///     fn accept(&self, divergence: &Divergence, _eval_index: usize) -> bool {
///         divergence.kind() == DivergenceType::Up
///     }
///
///     fn name(&self) -> &str { "long_only" }
/// }
/// ```
pub trait ConfirmationFilter: Send + Sync {
    /// Returns true when `divergence`, evaluated at `eval_index`, is accepted.
    fn accept(&self, divergence: &Divergence, eval_index: usize) -> bool;

    /// Name of the filter, used in logs.
    fn name(&self) -> &str;
}

impl<F> ConfirmationFilter for F
where
    F: Fn(&Divergence, usize) -> bool + Send + Sync,
{
    fn accept(&self, divergence: &Divergence, eval_index: usize) -> bool {
        self(divergence, eval_index)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// Receives accepted divergences, typically to draw or store them.
pub trait DivergenceSink {
    /// Called once per accepted divergence with its trend line payload.
    fn on_divergence(&mut self, divergence: &Divergence, line: &TrendLine);
}

/// Keeps every trend line, repeated labels included.
impl DivergenceSink for Vec<TrendLine> {
    fn on_divergence(&mut self, _divergence: &Divergence, line: &TrendLine) {
        self.push(line.clone());
    }
}
