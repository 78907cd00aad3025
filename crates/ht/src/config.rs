//! Configuration for Horvitz-Thompson aggregation.

use crate::error::HtError;

/// Configuration for the aggregation stage.
///
/// # Example
///
/// ```
/// use cruise_ht::HtConfig;
///
/// let config = HtConfig::new().with_confidence_level(0.95);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HtConfig {
    /// Two-sided confidence level for the interval.
    confidence_level: f64,
}

impl HtConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Default: `confidence_level = 0.90`.
    pub fn new() -> Self {
        Self {
            confidence_level: 0.90,
        }
    }

    /// Sets the two-sided confidence level (in (0, 1)).
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the confidence level is outside (0, 1).
    pub fn validate(&self) -> Result<(), HtError> {
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(HtError::InvalidConfidenceLevel {
                level: self.confidence_level,
            });
        }
        Ok(())
    }
}

impl Default for HtConfig {
    fn default() -> Self {
        Self::new()
    }
}
