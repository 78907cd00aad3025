//! Summary output for repeated-trial simulations.

use serde::Serialize;

/// Aggregate diagnostics across independent simulation trials.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    /// Trials attempted.
    pub n_trials: usize,
    /// Trials that failed and were discarded.
    pub n_failed: usize,
    /// Mean estimated total across successful trials.
    pub mean_total: f64,
    /// True population total from the frame (simulation ground truth).
    pub true_total: f64,
    /// `(mean_total - true_total) / true_total`.
    pub relative_bias: f64,
    /// Fraction of successful trials whose confidence interval contained
    /// the true total.
    pub coverage: f64,
    /// Nominal two-sided confidence level of the intervals.
    pub confidence_level: f64,
    /// Mean confidence half-width across successful trials.
    pub mean_half_width: f64,
}
