//! Knox Types
//!
//! Core data structures for the Knox divergence detector.
//! This crate provides the divergence record, trend directions,
//! line style value objects and the validated detector configuration.

#![deny(clippy::all)]

pub mod config;
pub mod divergence;
pub mod error;
pub mod style;

// Re-export main types for convenience
pub use config::DivergenceConfig;
pub use divergence::{Direction, Divergence, DivergenceType};
pub use error::CoreError;
pub use style::{DivergenceStyle, LineStyle, ParseLineStyleError};
