use crate::error::CoreError;
use crate::style::DivergenceStyle;

/// Smallest accepted lookback window.
pub const MIN_LOOKBACK_PERIODS: usize = 20;

/// Divergence detector configuration.
///
/// Every field has a default, so `{}` is a valid configuration. Build it once
/// at startup with [`DivergenceConfig::from_json`] (which validates) or call
/// [`DivergenceConfig::validate`] after constructing it by hand.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DivergenceConfig {
    /// How many bars back a divergence may start
    #[serde(default = "default_lookback_periods")]
    pub lookback_periods: usize,
    /// Minimum bars between start and end; also the local-extremum neighborhood
    #[serde(default = "default_min_distance")]
    pub min_distance: usize,
    /// Period of the momentum oscillator feeding the secondary series
    #[serde(default = "default_indicator_periods")]
    pub momentum_periods: usize,
    /// Period of the RSI used by the confirmation gate
    #[serde(default = "default_indicator_periods")]
    pub rsi_periods: usize,
    /// Down divergences need the RSI at or above this level
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,
    /// Up divergences need the RSI at or below this level
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,
    /// Rendering style for up divergences
    #[serde(default = "DivergenceStyle::default_up")]
    pub up_style: DivergenceStyle,
    /// Rendering style for down divergences
    #[serde(default = "DivergenceStyle::default_down")]
    pub down_style: DivergenceStyle,
}

fn default_lookback_periods() -> usize {
    300
}

fn default_min_distance() -> usize {
    10
}

fn default_indicator_periods() -> usize {
    14
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_rsi_oversold() -> f64 {
    30.0
}

impl Default for DivergenceConfig {
    fn default() -> Self {
        Self {
            lookback_periods: default_lookback_periods(),
            min_distance: default_min_distance(),
            momentum_periods: default_indicator_periods(),
            rsi_periods: default_indicator_periods(),
            rsi_overbought: default_rsi_overbought(),
            rsi_oversold: default_rsi_oversold(),
            up_style: DivergenceStyle::default_up(),
            down_style: DivergenceStyle::default_down(),
        }
    }
}

impl DivergenceConfig {
    /// Parses and validates a configuration from a JSON value.
    ///
    /// # Errors
    /// Returns `CoreError::Json` if the value does not match the schema and
    /// the validation errors of [`DivergenceConfig::validate`] otherwise.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    /// Same as [`DivergenceConfig::from_json`].
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks all ranges and cross-field constraints.
    ///
    /// # Errors
    /// Returns `CoreError::ParamOutOfRange` for a field outside its range and
    /// `CoreError::Config` for violated cross-field constraints.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), CoreError> {
        check_min("lookback_periods", self.lookback_periods, MIN_LOOKBACK_PERIODS)?;
        check_min("min_distance", self.min_distance, 1)?;
        check_min("momentum_periods", self.momentum_periods, 1)?;
        check_min("rsi_periods", self.rsi_periods, 1)?;

        if self.min_distance >= self.lookback_periods {
            return Err(CoreError::config(format!(
                "min_distance ({}) must be less than lookback_periods ({})",
                self.min_distance, self.lookback_periods
            )));
        }

        check_rsi_level("rsi_overbought", self.rsi_overbought)?;
        check_rsi_level("rsi_oversold", self.rsi_oversold)?;
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(CoreError::config(format!(
                "rsi_oversold ({}) must be less than rsi_overbought ({})",
                self.rsi_oversold, self.rsi_overbought
            )));
        }

        check_min("up_style.thickness", self.up_style.thickness as usize, 1)?;
        check_min("down_style.thickness", self.down_style.thickness as usize, 1)?;

        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_min(param: &str, value: usize, min: usize) -> Result<(), CoreError> {
    if value < min {
        return Err(CoreError::param_out_of_range(
            param,
            value as f64,
            min as f64,
            f64::INFINITY,
        ));
    }
    Ok(())
}

fn check_rsi_level(param: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(CoreError::param_out_of_range(param, value, 0.0, 100.0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineStyle;

    const FLOAT_EPS: f64 = 1e-12;

    fn assert_f64_eq(left: f64, right: f64) {
        assert!((left - right).abs() < FLOAT_EPS);
    }

    #[test]
    fn test_config_defaults() {
        let config = DivergenceConfig::default();
        assert_eq!(config.lookback_periods, 300);
        assert_eq!(config.min_distance, 10);
        assert_eq!(config.momentum_periods, 14);
        assert_eq!(config.rsi_periods, 14);
        assert_f64_eq(config.rsi_overbought, 70.0);
        assert_f64_eq(config.rsi_oversold, 30.0);
        assert_eq!(config.up_style.color, "Lime");
        assert_eq!(config.down_style.color, "Red");
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DivergenceConfig::from_json(&serde_json::json!({})).unwrap();
        assert_eq!(config, DivergenceConfig::default());
    }

    #[test]
    fn test_from_json_overrides() {
        let config = DivergenceConfig::from_json(&serde_json::json!({
            "lookback_periods": 50,
            "min_distance": 3,
            "rsi_overbought": 80.0,
            "down_style": {"color": "#FF8800", "thickness": 2, "style": "dots"}
        }))
        .unwrap();

        assert_eq!(config.lookback_periods, 50);
        assert_eq!(config.min_distance, 3);
        assert_f64_eq(config.rsi_overbought, 80.0);
        assert_eq!(config.down_style.thickness, 2);
        assert_eq!(config.down_style.style, LineStyle::Dots);
        assert_eq!(config.up_style, DivergenceStyle::default_up());
    }

    #[test]
    fn test_lookback_below_minimum_rejected() {
        let err = DivergenceConfig::from_json(&serde_json::json!({"lookback_periods": 19}))
            .unwrap_err();
        assert!(matches!(err, CoreError::ParamOutOfRange { ref param, .. } if param == "lookback_periods"));
    }

    #[test]
    fn test_zero_min_distance_rejected() {
        let config = DivergenceConfig {
            min_distance: 0,
            ..DivergenceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::ParamOutOfRange { ref param, .. }) if param == "min_distance"
        ));
    }

    #[test]
    fn test_min_distance_must_fit_lookback() {
        let config = DivergenceConfig {
            lookback_periods: 20,
            min_distance: 20,
            ..DivergenceConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_rsi_levels_validated() {
        let inverted = DivergenceConfig {
            rsi_overbought: 30.0,
            rsi_oversold: 70.0,
            ..DivergenceConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(CoreError::Config(_))));

        let out_of_range = DivergenceConfig {
            rsi_overbought: 120.0,
            ..DivergenceConfig::default()
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(CoreError::ParamOutOfRange { .. })
        ));

        let nan = DivergenceConfig {
            rsi_oversold: f64::NAN,
            ..DivergenceConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_zero_thickness_rejected() {
        let mut config = DivergenceConfig::default();
        config.up_style.thickness = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DivergenceConfig::from_json_str(r#"{"periods": 300}"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DivergenceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = DivergenceConfig::from_json_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
