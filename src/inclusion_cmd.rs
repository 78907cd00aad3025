use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use cruise_frame::{Frame, synthetic_frame};
use cruise_pps::{inclusion_analytic, inclusion_monte_carlo};

use crate::cli::InclusionArgs;
use crate::config::CruiseConfig;
use crate::report;

/// Per-stand inclusion probabilities under both estimation methods.
#[derive(Debug, Serialize)]
struct InclusionRow {
    stand_id: u32,
    acres: f64,
    age: f64,
    weight: f64,
    pi_analytic: f64,
    pi_monte_carlo: f64,
}

/// Inclusion-probability report for a frame and sample size.
#[derive(Debug, Serialize)]
struct InclusionReport {
    n_stands: usize,
    sample_size: usize,
    mc_trials: usize,
    stands: Vec<InclusionRow>,
}

/// Report Monte Carlo and analytic inclusion probabilities per stand.
pub fn run(args: &InclusionArgs) -> Result<()> {
    let config = CruiseConfig::load(&args.config)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let frame = synthetic_frame(config.frame.n_stands, &mut rng)
        .context("failed to build synthetic frame")?;

    let n = config.design.sample_size;
    let trials = config.design.mc_trials;
    let pi_analytic =
        inclusion_analytic(frame.weights(), n).context("analytic inclusion failed")?;
    let pi_mc = inclusion_monte_carlo(frame.weights(), n, trials, &mut rng)
        .context("Monte Carlo inclusion failed")?;
    info!(n_stands = frame.len(), sample_size = n, mc_trials = trials, "inclusion probabilities computed");

    let report = build_report(&frame, n, trials, &pi_analytic, &pi_mc);
    report::emit(&report, args.output.as_deref())
}

fn build_report(
    frame: &Frame,
    sample_size: usize,
    mc_trials: usize,
    pi_analytic: &[f64],
    pi_mc: &[f64],
) -> InclusionReport {
    let stands = frame
        .stands()
        .iter()
        .enumerate()
        .map(|(i, stand)| InclusionRow {
            stand_id: stand.id,
            acres: stand.acres,
            age: stand.age,
            weight: frame.weights()[i],
            pi_analytic: pi_analytic[i],
            pi_monte_carlo: pi_mc[i],
        })
        .collect();
    InclusionReport {
        n_stands: frame.len(),
        sample_size,
        mc_trials,
        stands,
    }
}
