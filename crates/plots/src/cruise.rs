//! Second-stage cruising: plot allocation and per-stand estimation.

use cruise_frame::Stand;
use rand::Rng;

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::result::StandSample;
use crate::truncnorm::truncated_normal;

/// Number of plots to measure in a stand:
/// `clamp(ceil(acres / spacing), min_plots, max_plots)`.
///
/// Scales effort with stand size while guaranteeing at least two plots
/// (so the within-stand variance is computable) and capping the cost of
/// very large stands.
pub fn allocate_plots(acres: f64, config: &PlotConfig) -> usize {
    let raw = (acres / config.plot_spacing_acres()).ceil() as usize;
    raw.clamp(config.min_plots(), config.max_plots())
}

/// Cruises one stand: allocates plots, simulates a per-acre volume
/// measurement on each from `Normal(mean_volume, cv * mean_volume)`
/// truncated to `[0, volume_cap]`, and derives the stand estimates.
///
/// The stand total estimate is `t_hat = plot mean * acres`; its
/// sub-sampling variance is `var_t_hat = (plot variance / n_plots) *
/// acres^2`, with the plot variance using the N-1 denominator.
///
/// # Errors
///
/// Returns [`PlotError`] if the configuration is invalid, fewer than 2
/// plots are allocated, or a truncated draw fails.
pub fn cruise_stand(
    stand: &Stand,
    config: &PlotConfig,
    rng: &mut impl Rng,
) -> Result<StandSample, PlotError> {
    config.validate()?;

    let n_plots = allocate_plots(stand.acres, config);
    if n_plots < 2 {
        return Err(PlotError::InsufficientPlots {
            id: stand.id,
            n_plots,
        });
    }

    let sd = stand.cv * stand.mean_volume;
    let mut observations = Vec::with_capacity(n_plots);
    for _ in 0..n_plots {
        observations.push(truncated_normal(
            stand.mean_volume,
            sd,
            0.0,
            config.volume_cap(),
            rng,
        )?);
    }

    let m = n_plots as f64;
    let mean = observations.iter().sum::<f64>() / m;
    let plot_var = observations
        .iter()
        .map(|&x| (x - mean) * (x - mean))
        .sum::<f64>()
        / (m - 1.0);

    let t_hat = mean * stand.acres;
    let var_t_hat = plot_var / m * stand.acres * stand.acres;

    Ok(StandSample::new(stand.id, observations, mean, t_hat, var_t_hat))
}
