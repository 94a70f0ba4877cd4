//! Knox Signal
//!
//! Consumer side of the divergence detector: confirmation filters, trend
//! line sinks and a runner that drives detection bar by bar.
//!
//! # Features
//! - `ConfirmationFilter` trait with an RSI overbought/oversold gate
//! - `TrendLine` payload carrying endpoints and the style for its type
//! - `DivergenceSink` trait with a label-keyed, idempotent `TrendLineSink`
//! - `DivergenceRunner` with warmup guard and full-history runs
//!
//! # Example
//! ```ignore
//! use knox_signal::{DivergenceRunner, RsiThresholdGate, TrendLineSink};
//! use knox_types::DivergenceConfig;
//!
//! let config = DivergenceConfig::from_json(&serde_json::json!({
//!     "lookback_periods": 100,
//!     "min_distance": 5
//! }))?;
//! let gate = RsiThresholdGate::from_config(rsi, &config);
//! let runner = DivergenceRunner::from_config(&config, gate)?;
//!
//! let mut sink = TrendLineSink::new();
//! // On every new bar:
//! runner.on_bar(&close, &momentum, index, &mut sink)?;
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod filter;
pub mod line;
pub mod runner;
pub mod sink;
pub mod traits;

// Re-export main types
pub use error::SignalError;
pub use filter::{AcceptAll, RsiThresholdGate};
pub use line::TrendLine;
pub use runner::{BarOutcome, DivergenceRunner, RunSummary};
pub use sink::TrendLineSink;
pub use traits::{ConfirmationFilter, DivergenceSink};
