//! Configuration for the PPS sampling stage.

use crate::error::PpsError;

/// Configuration for first-stage PPS sampling.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use cruise_pps::PpsConfig;
///
/// let config = PpsConfig::new(5).with_mc_trials(20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PpsConfig {
    /// Number of stands to draw without replacement.
    sample_size: usize,
    /// Monte Carlo trials for inclusion-probability estimation.
    mc_trials: usize,
}

impl PpsConfig {
    /// Creates a new configuration with the given sample size.
    ///
    /// Default: `mc_trials = 10_000`.
    pub fn new(sample_size: usize) -> Self {
        Self {
            sample_size,
            mc_trials: 10_000,
        }
    }

    /// Sets the number of Monte Carlo trials.
    pub fn with_mc_trials(mut self, trials: usize) -> Self {
        self.mc_trials = trials;
        self
    }

    /// Returns the first-stage sample size.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the number of Monte Carlo trials.
    pub fn mc_trials(&self) -> usize {
        self.mc_trials
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `sample_size < 2` or `mc_trials == 0`. Whether
    /// the sample size fits the frame is checked at draw time, when the
    /// eligible-unit count is known.
    pub fn validate(&self) -> Result<(), PpsError> {
        if self.sample_size < 2 {
            return Err(PpsError::SampleTooSmall {
                n: self.sample_size,
            });
        }
        if self.mc_trials == 0 {
            return Err(PpsError::InvalidTrials {
                trials: self.mc_trials,
            });
        }
        Ok(())
    }
}
