//! Label-keyed trend line store.

use std::collections::HashMap;

use knox_types::Divergence;

use crate::line::TrendLine;
use crate::traits::DivergenceSink;

/// Keeps one trend line per divergence label.
///
/// Re-running detection over the same bars yields the same labels, so a
/// redraw replaces the stored line instead of adding a second one. Lines are
/// kept in first-drawn order.
#[derive(Debug, Clone, Default)]
pub struct TrendLineSink {
    lines: Vec<TrendLine>,
    by_label: HashMap<String, usize>,
}

impl TrendLineSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `line`, replacing a line with the same label.
    ///
    /// Returns true when the label was new.
    pub fn draw(&mut self, line: TrendLine) -> bool {
        if let Some(&slot) = self.by_label.get(&line.label) {
            self.lines[slot] = line;
            return false;
        }
        self.by_label.insert(line.label.clone(), self.lines.len());
        self.lines.push(line);
        true
    }

    /// Line stored under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&TrendLine> {
        self.by_label.get(label).map(|&slot| &self.lines[slot])
    }

    /// Whether a line with `label` was drawn.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// All lines in first-drawn order.
    #[must_use]
    pub fn lines(&self) -> &[TrendLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.by_label.clear();
    }
}

impl DivergenceSink for TrendLineSink {
    fn on_divergence(&mut self, _divergence: &Divergence, line: &TrendLine) {
        if !self.draw(line.clone()) {
            tracing::trace!(label = %line.label, "trend line redrawn");
        }
    }
}
