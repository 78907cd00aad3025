//! Sampling design: configuration plus precomputed inclusion probabilities.

use cruise_frame::Frame;
use cruise_ht::HtConfig;
use cruise_plots::PlotConfig;
use cruise_pps::{PpsConfig, inclusion_monte_carlo};
use rand::Rng;
use tracing::info;

use crate::error::SimError;

/// A fully resolved sampling design.
///
/// Bundles the three stage configurations with the Monte Carlo inclusion
/// probabilities, which are computed once at build time and shared
/// read-only by every trial (the frame and design never change between
/// trials; only the draws do).
#[derive(Debug, Clone)]
pub struct Design {
    pps: PpsConfig,
    plots: PlotConfig,
    ht: HtConfig,
    /// Frame-aligned Monte Carlo inclusion probabilities.
    pi: Vec<f64>,
    /// `Σ π_j (1 - π_j)` over the frame, input to the joint-inclusion
    /// approximation.
    pi_dispersion: f64,
}

impl Design {
    /// Builds a design for `frame`: validates all three configurations and
    /// runs the Monte Carlo inclusion-probability estimation.
    ///
    /// # Errors
    ///
    /// Returns [`SimError`] if any configuration is invalid or the
    /// inclusion estimation rejects the frame/sample-size combination.
    pub fn build(
        frame: &Frame,
        pps: PpsConfig,
        plots: PlotConfig,
        ht: HtConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, SimError> {
        pps.validate()?;
        plots.validate()?;
        ht.validate()?;

        info!(
            n_stands = frame.len(),
            sample_size = pps.sample_size(),
            mc_trials = pps.mc_trials(),
            "estimating inclusion probabilities"
        );
        let pi = inclusion_monte_carlo(frame.weights(), pps.sample_size(), pps.mc_trials(), rng)?;
        let pi_dispersion = pi.iter().map(|p| p * (1.0 - p)).sum();

        Ok(Self {
            pps,
            plots,
            ht,
            pi,
            pi_dispersion,
        })
    }

    /// Returns the first-stage configuration.
    pub fn pps(&self) -> &PpsConfig {
        &self.pps
    }

    /// Returns the second-stage configuration.
    pub fn plots(&self) -> &PlotConfig {
        &self.plots
    }

    /// Returns the aggregation configuration.
    pub fn ht(&self) -> &HtConfig {
        &self.ht
    }

    /// Returns the frame-aligned Monte Carlo inclusion probabilities.
    pub fn pi(&self) -> &[f64] {
        &self.pi
    }

    /// Returns `Σ π_j (1 - π_j)` over the frame.
    pub fn pi_dispersion(&self) -> f64 {
        self.pi_dispersion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cruise_frame::synthetic_frame;
    use cruise_pps::PpsError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_precomputes_pi() {
        let mut rng = StdRng::seed_from_u64(42);
        let frame = synthetic_frame(20, &mut rng).unwrap();
        let design = Design::build(
            &frame,
            PpsConfig::new(4).with_mc_trials(2000),
            PlotConfig::new(),
            HtConfig::new(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(design.pi().len(), 20);
        let sum: f64 = design.pi().iter().sum();
        assert_abs_diff_eq!(sum, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dispersion_matches_pi() {
        let mut rng = StdRng::seed_from_u64(42);
        let frame = synthetic_frame(20, &mut rng).unwrap();
        let design = Design::build(
            &frame,
            PpsConfig::new(4).with_mc_trials(2000),
            PlotConfig::new(),
            HtConfig::new(),
            &mut rng,
        )
        .unwrap();

        let expected: f64 = design.pi().iter().map(|p| p * (1.0 - p)).sum();
        assert_abs_diff_eq!(design.pi_dispersion(), expected, epsilon = 1e-12);
        assert!(design.pi_dispersion() > 0.0);
    }

    #[test]
    fn test_build_rejects_invalid_pps() {
        let mut rng = StdRng::seed_from_u64(42);
        let frame = synthetic_frame(20, &mut rng).unwrap();
        let result = Design::build(
            &frame,
            PpsConfig::new(1),
            PlotConfig::new(),
            HtConfig::new(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(SimError::Pps(PpsError::SampleTooSmall { n: 1 }))
        ));
    }

    #[test]
    fn test_build_rejects_census() {
        let mut rng = StdRng::seed_from_u64(42);
        let frame = synthetic_frame(5, &mut rng).unwrap();
        let result = Design::build(
            &frame,
            PpsConfig::new(5).with_mc_trials(10),
            PlotConfig::new(),
            HtConfig::new(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(SimError::Pps(PpsError::SampleExceedsFrame { .. }))
        ));
    }
}
