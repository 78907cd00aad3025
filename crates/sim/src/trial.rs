//! One full estimation trial: draw stands, cruise plots, aggregate.

use cruise_frame::Frame;
use cruise_ht::{PopulationEstimate, StandTerm, estimate_total};
use cruise_plots::cruise_stand;
use cruise_pps::sample_pps;
use rand::Rng;
use tracing::debug;

use crate::design::Design;
use crate::error::SimError;

/// Result of one trial: the population estimate and the frame indices of
/// the stands that were drawn.
#[derive(Debug, Clone)]
pub struct Trial {
    estimate: PopulationEstimate,
    stand_indices: Vec<usize>,
}

impl Trial {
    /// Returns the population estimate.
    pub fn estimate(&self) -> &PopulationEstimate {
        &self.estimate
    }

    /// Returns the frame indices of the drawn stands, in draw order.
    pub fn stand_indices(&self) -> &[usize] {
        &self.stand_indices
    }
}

/// Runs one full stage-1 → stage-2 → stage-3 pass over the frame.
///
/// Draws a PPS sample of stands, cruises each drawn stand, and
/// aggregates the per-stand terms into a [`PopulationEstimate`] using
/// the design's precomputed Monte Carlo inclusion probabilities.
///
/// # Errors
///
/// Returns [`SimError`] if any stage rejects its inputs. A notable case:
/// a drawn stand whose Monte Carlo inclusion probability is 0 (possible
/// for very light stands when `mc_trials` is small) is rejected by the
/// aggregator rather than dividing by zero; the simulation loop treats
/// such trials as discarded samples.
pub fn run_trial(frame: &Frame, design: &Design, rng: &mut impl Rng) -> Result<Trial, SimError> {
    let indices = sample_pps(frame.weights(), design.pps().sample_size(), rng)?;
    debug!(n_drawn = indices.len(), "first-stage sample drawn");

    let mut terms = Vec::with_capacity(indices.len());
    for &i in &indices {
        let stand = &frame.stands()[i];
        let sample = cruise_stand(stand, design.plots(), rng)?;
        terms.push(StandTerm {
            stand_id: stand.id,
            t_hat: sample.t_hat(),
            var_t_hat: sample.var_t_hat(),
            pi: design.pi()[i],
            weight: frame.weights()[i],
            n_plots: sample.n_plots(),
        });
    }

    let estimate = estimate_total(
        &terms,
        frame.len(),
        frame.total_acres(),
        design.pi_dispersion(),
        design.ht(),
    )?;
    Ok(Trial {
        estimate,
        stand_indices: indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cruise_frame::synthetic_frame;
    use cruise_ht::HtConfig;
    use cruise_plots::PlotConfig;
    use cruise_pps::PpsConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(seed: u64) -> (Frame, Design) {
        let mut rng = StdRng::seed_from_u64(seed);
        let frame = synthetic_frame(25, &mut rng).unwrap();
        let design = Design::build(
            &frame,
            PpsConfig::new(5).with_mc_trials(3000),
            PlotConfig::new(),
            HtConfig::new(),
            &mut rng,
        )
        .unwrap();
        (frame, design)
    }

    #[test]
    fn test_trial_shape() {
        let (frame, design) = setup(42);
        let mut rng = StdRng::seed_from_u64(1);
        let trial = run_trial(&frame, &design, &mut rng).unwrap();

        assert_eq!(trial.stand_indices().len(), 5);
        assert_eq!(trial.estimate().n_sampled, 5);
        assert_eq!(trial.estimate().stands.len(), 5);
        assert!(trial.estimate().total > 0.0);
        assert!(trial.estimate().variance >= 0.0);
    }

    #[test]
    fn test_trial_no_duplicate_stands() {
        let (frame, design) = setup(42);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let trial = run_trial(&frame, &design, &mut rng).unwrap();
            let mut ids: Vec<u32> = trial.estimate().stands.iter().map(|s| s.stand_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 5, "duplicate stand in trial with seed {seed}");
        }
    }

    #[test]
    fn test_trial_reproducible() {
        let (frame, design) = setup(42);
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let t1 = run_trial(&frame, &design, &mut rng1).unwrap();
        let t2 = run_trial(&frame, &design, &mut rng2).unwrap();
        assert_eq!(t1.stand_indices(), t2.stand_indices());
        assert_eq!(t1.estimate().total, t2.estimate().total);
    }

    #[test]
    fn test_trial_diagnostics_match_design() {
        let (frame, design) = setup(42);
        let mut rng = StdRng::seed_from_u64(3);
        let trial = run_trial(&frame, &design, &mut rng).unwrap();
        for (term, &idx) in trial.estimate().stands.iter().zip(trial.stand_indices()) {
            assert_eq!(term.stand_id, frame.stands()[idx].id);
            assert_eq!(term.pi, design.pi()[idx]);
            assert_eq!(term.weight, frame.weights()[idx]);
        }
    }
}
