//! Signal error types

use knox_divergence::DivergenceError;
use knox_types::CoreError;
use thiserror::Error;

/// Errors raised while running detection for a consumer
#[derive(Debug, Error)]
pub enum SignalError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Detection failed
    #[error("Detection error: {0}")]
    Detection(#[from] DivergenceError),
}
