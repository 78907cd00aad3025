//! Repeated-trial simulation with per-trial seeding.

use cruise_frame::Frame;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::design::Design;
use crate::error::SimError;
use crate::result::SimulationSummary;
use crate::trial::run_trial;

/// Runs `n_trials` independent estimation trials and summarizes bias and
/// confidence-interval coverage against the frame's true total.
///
/// Each trial gets its own `StdRng` seeded from `base_seed + trial index`,
/// so trials are reproducible and mutually independent regardless of how
/// many are run (or, in a future extension, on which thread each runs).
/// A failed trial is logged at `warn` and discarded; it counts toward
/// `n_failed` but never aborts the simulation.
///
/// # Errors
///
/// Returns [`SimError::NoTrials`] if `n_trials == 0` and
/// [`SimError::AllTrialsFailed`] if no trial succeeded.
pub fn run_simulation(
    frame: &Frame,
    design: &Design,
    n_trials: usize,
    base_seed: u64,
) -> Result<SimulationSummary, SimError> {
    if n_trials == 0 {
        return Err(SimError::NoTrials);
    }

    let true_total = frame.true_total();
    let mut n_failed = 0usize;
    let mut total_sum = 0.0;
    let mut half_width_sum = 0.0;
    let mut covered = 0usize;

    for t in 0..n_trials {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(t as u64));
        match run_trial(frame, design, &mut rng) {
            Ok(trial) => {
                let est = trial.estimate();
                total_sum += est.total;
                half_width_sum += est.half_width;
                if est.lower <= true_total && true_total <= est.upper {
                    covered += 1;
                }
            }
            Err(e) => {
                warn!(trial = t, error = %e, "trial failed, discarding");
                n_failed += 1;
            }
        }
    }

    let n_ok = n_trials - n_failed;
    if n_ok == 0 {
        return Err(SimError::AllTrialsFailed { n_trials });
    }

    let mean_total = total_sum / n_ok as f64;
    let summary = SimulationSummary {
        n_trials,
        n_failed,
        mean_total,
        true_total,
        relative_bias: (mean_total - true_total) / true_total,
        coverage: covered as f64 / n_ok as f64,
        confidence_level: design.ht().confidence_level(),
        mean_half_width: half_width_sum / n_ok as f64,
    };
    info!(
        n_ok,
        n_failed,
        relative_bias = summary.relative_bias,
        coverage = summary.coverage,
        "simulation complete"
    );
    Ok(summary)
}
