use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use cruise_frame::synthetic_frame;
use cruise_sim::{Design, run_simulation};

use crate::cli::SimulateArgs;
use crate::config::CruiseConfig;
use crate::convert;
use crate::report;

/// Run repeated cruises and report bias and coverage diagnostics.
pub fn run(args: &SimulateArgs) -> Result<()> {
    let config = CruiseConfig::load(&args.config)?;
    let n_trials = args.trials.unwrap_or(config.simulate.n_trials);

    // A concrete base seed is always needed so per-trial seeds are
    // well-defined; draw one from the OS when none is configured.
    let base_seed = match args.seed.or(config.seed) {
        Some(s) => s,
        None => StdRng::from_os_rng().random(),
    };
    info!(base_seed, n_trials, "starting simulation");

    let mut rng = StdRng::seed_from_u64(base_seed);
    let frame = synthetic_frame(config.frame.n_stands, &mut rng)
        .context("failed to build synthetic frame")?;

    let design = Design::build(
        &frame,
        convert::build_pps_config(&config.design),
        convert::build_plot_config(&config.design),
        convert::build_ht_config(&config.design),
        &mut rng,
    )
    .context("failed to build sampling design")?;

    // Trial seeds start one past the frame seed so no trial shares a seed
    // with the frame/design RNG.
    let summary = run_simulation(&frame, &design, n_trials, base_seed.wrapping_add(1))
        .context("simulation failed")?;
    info!(
        relative_bias = summary.relative_bias,
        coverage = summary.coverage,
        "simulation complete"
    );

    report::emit(&summary, args.output.as_deref())
}
