//! Truncated normal draws by rejection.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::PlotError;

/// Attempt budget for a single truncated draw. With any reasonable
/// parameterization the acceptance rate is far above 1/10_000; exhausting
/// the budget means the acceptance region is effectively unreachable.
const MAX_ATTEMPTS: usize = 10_000;

/// Draws one value from `Normal(mean, sd)` truncated to `[lo, hi]`.
///
/// Rejection sampling: out-of-range draws are discarded and redrawn, so
/// the distribution keeps its shape inside the bounds (truncation, not
/// clipping). A degenerate `sd == 0` returns `mean` when it lies inside
/// the bounds.
///
/// # Errors
///
/// Returns [`PlotError::NormalConstruction`] for invalid parameters and
/// [`PlotError::TruncationFailed`] when `sd == 0` with `mean` out of
/// range, or when no draw lands in range within the attempt budget.
pub fn truncated_normal(
    mean: f64,
    sd: f64,
    lo: f64,
    hi: f64,
    rng: &mut impl Rng,
) -> Result<f64, PlotError> {
    // rand_distr only rejects non-finite parameters; a negative sd must
    // be caught here.
    if sd < 0.0 {
        return Err(PlotError::NormalConstruction {
            mean,
            sd,
            message: "standard deviation is negative".to_string(),
        });
    }
    if sd == 0.0 {
        if (lo..=hi).contains(&mean) {
            return Ok(mean);
        }
        return Err(PlotError::TruncationFailed { mean, sd, lo, hi });
    }

    let normal = Normal::new(mean, sd).map_err(|e| PlotError::NormalConstruction {
        mean,
        sd,
        message: e.to_string(),
    })?;

    for _ in 0..MAX_ATTEMPTS {
        let x = normal.sample(rng);
        if (lo..=hi).contains(&x) {
            return Ok(x);
        }
    }
    Err(PlotError::TruncationFailed { mean, sd, lo, hi })
}
