use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default_cycle_length must be at least 1 day")]
    ZeroCycleLength,
    #[error("confidence_penalty_per_day must be a non-negative number")]
    InvalidPenalty,
    #[error("heavy_flow_ratio must be between 0 and 1")]
    InvalidHeavyRatio,
}

/// Tunable thresholds for prediction and risk scoring.
/// Missing fields in a config document fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Used whenever there are no cycle lengths to average.
    pub default_cycle_length: u32,
    /// Confidence points lost per day of cycle-length standard deviation.
    pub confidence_penalty_per_day: f64,
    pub irregular_deviation_days: f64,
    pub long_cycle_days: f64,
    /// Fraction of heavy-flow records above which bleeding counts as heavy.
    pub heavy_flow_ratio: f64,
    pub frequent_symptom_count: usize,
    pub late_period_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: 28,
            confidence_penalty_per_day: 10.0,
            irregular_deviation_days: 7.0,
            long_cycle_days: 35.0,
            heavy_flow_ratio: 0.5,
            frequent_symptom_count: 5,
            late_period_days: 35,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_cycle_length == 0 {
            return Err(ConfigError::ZeroCycleLength);
        }
        if !self.confidence_penalty_per_day.is_finite() || self.confidence_penalty_per_day < 0.0 {
            return Err(ConfigError::InvalidPenalty);
        }
        if !(0.0..=1.0).contains(&self.heavy_flow_ratio) {
            return Err(ConfigError::InvalidHeavyRatio);
        }
        Ok(())
    }
}
