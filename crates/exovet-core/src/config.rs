//! Configuration for the federation engine.
//!
//! # Examples
//!
//! ```
//! use exovet_core::config::FederationConfig;
//!
//! let config = FederationConfig::default();
//! assert!((config.learning_rate - 0.1).abs() < f64::EPSILON);
//! assert_eq!(config.consensus_window, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{VetError, VetResult};

/// Tunables for aggregation and feedback learning.
///
/// All fields have sensible defaults; a partial TOML document only needs
/// to name the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Learning rate η for feedback weight updates. Default: 0.1.
    pub learning_rate: f64,
    /// Fixed step scaled by the loss gradient when feedback is correct. Default: 0.01.
    pub correct_step: f64,
    /// Fixed step scaled by the loss gradient when feedback is incorrect. Default: 0.01.
    pub incorrect_step: f64,
    /// Lower bound for reliability weights. Default: 0.1.
    pub min_weight: f64,
    /// Upper bound for reliability weights. Default: 2.0.
    pub max_weight: f64,
    /// Weight assigned to newly registered helpers. Default: 1.0.
    pub initial_weight: f64,
    /// Size of the recent consensus-score window. Default: 50.
    pub consensus_window: usize,
    /// Lower clamp on recorded predictions before the gradient. Default: 0.001.
    pub prediction_floor: f64,
    /// Upper clamp on recorded predictions before the gradient. Default: 0.999.
    pub prediction_ceiling: f64,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            learning_rate: constants::DEFAULT_LEARNING_RATE,
            correct_step: constants::FEEDBACK_STEP,
            incorrect_step: constants::FEEDBACK_STEP,
            min_weight: constants::MIN_WEIGHT,
            max_weight: constants::MAX_WEIGHT,
            initial_weight: constants::INITIAL_WEIGHT,
            consensus_window: constants::CONSENSUS_WINDOW,
            prediction_floor: constants::PREDICTION_FLOOR,
            prediction_ceiling: constants::PREDICTION_CEILING,
        }
    }
}

impl FederationConfig {
    /// Parse a config from a TOML document, validating bounds.
    pub fn from_toml_str(s: &str) -> VetResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| VetError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the bounds.
    pub fn validate(&self) -> VetResult<()> {
        if self.min_weight <= 0.0 || self.min_weight >= self.max_weight {
            return Err(VetError::InvalidConfig(format!(
                "weight bounds must satisfy 0 < min < max, got [{}, {}]",
                self.min_weight, self.max_weight
            )));
        }
        // Configured bounds may narrow but never widen the hard
        // reliability-weight envelope.
        if self.min_weight < constants::MIN_WEIGHT || self.max_weight > constants::MAX_WEIGHT {
            return Err(VetError::InvalidConfig(format!(
                "weight bounds must stay within [{}, {}], got [{}, {}]",
                constants::MIN_WEIGHT,
                constants::MAX_WEIGHT,
                self.min_weight,
                self.max_weight
            )));
        }
        if !(self.min_weight..=self.max_weight).contains(&self.initial_weight) {
            return Err(VetError::InvalidConfig(format!(
                "initial weight {} outside [{}, {}]",
                self.initial_weight, self.min_weight, self.max_weight
            )));
        }
        if self.learning_rate <= 0.0 {
            return Err(VetError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.prediction_floor <= 0.0
            || self.prediction_ceiling >= 1.0
            || self.prediction_floor >= self.prediction_ceiling
        {
            return Err(VetError::InvalidConfig(format!(
                "prediction clamp must satisfy 0 < floor < ceiling < 1, got [{}, {}]",
                self.prediction_floor, self.prediction_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        FederationConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = FederationConfig::from_toml_str("learning_rate = 0.05").unwrap();
        assert!((config.learning_rate - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.consensus_window, 50);
    }

    #[test]
    fn inverted_weight_bounds_rejected() {
        let result = FederationConfig::from_toml_str("min_weight = 3.0\nmax_weight = 2.0");
        assert!(matches!(result, Err(VetError::InvalidConfig(_))));
    }

    #[test]
    fn zero_learning_rate_rejected() {
        let result = FederationConfig::from_toml_str("learning_rate = 0.0");
        assert!(matches!(result, Err(VetError::InvalidConfig(_))));
    }

    #[test]
    fn inverted_prediction_clamp_rejected() {
        let result =
            FederationConfig::from_toml_str("prediction_floor = 0.9\nprediction_ceiling = 0.1");
        assert!(matches!(result, Err(VetError::InvalidConfig(_))));
    }

    #[test]
    fn weight_bounds_outside_hard_envelope_rejected() {
        let result = FederationConfig::from_toml_str("max_weight = 3.0");
        assert!(matches!(result, Err(VetError::InvalidConfig(_))));
        let result = FederationConfig::from_toml_str("min_weight = 0.01");
        assert!(matches!(result, Err(VetError::InvalidConfig(_))));
        // Narrowed bounds are fine.
        FederationConfig::from_toml_str("min_weight = 0.5\nmax_weight = 1.5").unwrap();
    }
}
