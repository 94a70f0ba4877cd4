use thiserror::Error;

/// Core error types for Knox
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parameter out of valid range
    #[error("Parameter out of range: {param} = {value} (valid: {min}..={max})")]
    ParamOutOfRange {
        /// Parameter name.
        param: String,
        /// Parameter value.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Start index not strictly before end index
    #[error("Invalid range: start index {start} must be less than end index {end}")]
    InvalidRange {
        /// Start index.
        start: usize,
        /// End index.
        end: usize,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Creates a `Config` error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        CoreError::Config(msg.into())
    }

    /// Creates a `ParamOutOfRange` error.
    #[must_use]
    pub fn param_out_of_range(param: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CoreError::ParamOutOfRange {
            param: param.into(),
            value,
            min,
            max,
        }
    }
}
