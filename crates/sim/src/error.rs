//! Error types for the cruise-sim crate.

use cruise_ht::HtError;
use cruise_plots::PlotError;
use cruise_pps::PpsError;

/// Error type for all fallible operations in the cruise-sim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimError {
    /// First-stage sampling or inclusion-probability failure.
    #[error(transparent)]
    Pps(#[from] PpsError),

    /// Second-stage plot sampling failure.
    #[error(transparent)]
    Plots(#[from] PlotError),

    /// Aggregation failure.
    #[error(transparent)]
    Ht(#[from] HtError),

    /// Returned when zero simulation trials are requested.
    #[error("simulation needs at least 1 trial")]
    NoTrials,

    /// Returned when every trial of a simulation failed.
    #[error("all {n_trials} trials failed")]
    AllTrialsFailed {
        /// Number of trials attempted.
        n_trials: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_no_trials() {
        let e = SimError::NoTrials;
        assert_eq!(e.to_string(), "simulation needs at least 1 trial");
    }

    #[test]
    fn error_all_trials_failed() {
        let e = SimError::AllTrialsFailed { n_trials: 50 };
        assert_eq!(e.to_string(), "all 50 trials failed");
    }

    #[test]
    fn error_wraps_stage_errors_transparently() {
        let e: SimError = PpsError::SampleTooSmall { n: 1 }.into();
        assert_eq!(e.to_string(), "sample size must be >= 2, got 1");

        let e: SimError = HtError::InsufficientSample { n: 1 }.into();
        assert_eq!(e.to_string(), "need at least 2 sampled stands, got 1");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SimError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SimError>();
    }
}
