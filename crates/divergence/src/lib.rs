//! Knox Divergence
//!
//! Divergence detection between two aligned series, typically a price series
//! and a momentum oscillator computed from it.
//!
//! # Features
//! - `Series` trait over slices, vectors and deques
//! - Extremum scanner: windowed maximum/minimum, local high/low tests
//! - Trend validity checker: straight-line connection tests
//! - Divergence classifier for a single `(start, end)` pair
//! - Window scanner returning every divergence ending at an evaluated bar
//!
//! # Example
//! ```
//! use knox_divergence::DivergenceDetector;
//!
//! let price: Vec<f64> = (0..40).map(f64::from).collect();
//! let momentum: Vec<f64> = (0..40).map(|v| f64::from(v) * 2.0).collect();
//!
//! let detector = DivergenceDetector::new(20, 3);
//! let found = detector.detect(&price, &momentum, 39).unwrap();
//! assert!(found.is_empty());
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

pub mod classifier;
pub mod error;
pub mod extremum;
pub mod scanner;
pub mod series;
pub mod trend;

// Re-export main types
pub use classifier::{classify, is_diverged};
pub use error::{DivergenceError, Result};
pub use extremum::{LocalExtremum, is_higher, is_lower, maximum, minimum};
pub use scanner::{DivergenceDetector, detect_divergences};
pub use series::Series;
pub use trend::{is_connection_possible, slope};

pub use knox_types::{Direction, Divergence, DivergenceType};
