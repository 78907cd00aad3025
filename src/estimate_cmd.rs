use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use cruise_frame::synthetic_frame;
use cruise_sim::{Design, run_trial};

use crate::cli::EstimateArgs;
use crate::config::CruiseConfig;
use crate::convert;
use crate::report;

/// Run one full cruise and report the population estimate.
pub fn run(args: &EstimateArgs) -> Result<()> {
    let config = CruiseConfig::load(&args.config)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let frame = synthetic_frame(config.frame.n_stands, &mut rng)
        .context("failed to build synthetic frame")?;
    info!(
        n_stands = frame.len(),
        true_total = frame.true_total(),
        "frame built"
    );

    let design = Design::build(
        &frame,
        convert::build_pps_config(&config.design),
        convert::build_plot_config(&config.design),
        convert::build_ht_config(&config.design),
        &mut rng,
    )
    .context("failed to build sampling design")?;

    let trial = run_trial(&frame, &design, &mut rng).context("cruise failed")?;
    info!(
        total = trial.estimate().total,
        half_width = trial.estimate().half_width,
        "estimate complete"
    );

    report::emit(trial.estimate(), args.output.as_deref())
}
