//! Output type for a cruised stand.

use serde::Serialize;

/// Second-stage sample of one stand: the simulated plot measurements and
/// the derived stand-level estimates.
#[derive(Debug, Clone, Serialize)]
pub struct StandSample {
    /// Id of the cruised stand.
    stand_id: u32,
    /// Number of plots measured.
    n_plots: usize,
    /// Per-acre volume observations, one per plot, in draw order.
    observations: Vec<f64>,
    /// Mean per-acre volume across plots.
    mean_volume_hat: f64,
    /// Estimated stand total: `mean_volume_hat * acres`.
    t_hat: f64,
    /// Sampling variance of `t_hat` due to plot sub-sampling:
    /// `(plot variance / n_plots) * acres^2`.
    var_t_hat: f64,
}

impl StandSample {
    pub(crate) fn new(
        stand_id: u32,
        observations: Vec<f64>,
        mean_volume_hat: f64,
        t_hat: f64,
        var_t_hat: f64,
    ) -> Self {
        Self {
            stand_id,
            n_plots: observations.len(),
            observations,
            mean_volume_hat,
            t_hat,
            var_t_hat,
        }
    }

    /// Returns the id of the cruised stand.
    pub fn stand_id(&self) -> u32 {
        self.stand_id
    }

    /// Returns the number of plots measured.
    pub fn n_plots(&self) -> usize {
        self.n_plots
    }

    /// Returns the per-acre volume observations.
    pub fn observations(&self) -> &[f64] {
        &self.observations
    }

    /// Returns the mean per-acre volume across plots.
    pub fn mean_volume_hat(&self) -> f64 {
        self.mean_volume_hat
    }

    /// Returns the estimated stand total volume.
    pub fn t_hat(&self) -> f64 {
        self.t_hat
    }

    /// Returns the sampling variance of the stand total estimate.
    pub fn var_t_hat(&self) -> f64 {
        self.var_t_hat
    }
}
