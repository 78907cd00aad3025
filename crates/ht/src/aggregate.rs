//! Horvitz-Thompson total, variance, and confidence interval.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::config::HtConfig;
use crate::error::HtError;
use crate::joint::joint_inclusion;
use crate::result::{PopulationEstimate, StandTerm};

/// Validates one stand term.
fn validate_term(term: &StandTerm) -> Result<(), HtError> {
    if !term.pi.is_finite() || term.pi <= 0.0 || term.pi > 1.0 {
        return Err(HtError::InvalidInclusion {
            stand_id: term.stand_id,
            pi: term.pi,
        });
    }
    if !term.weight.is_finite() || term.weight <= 0.0 || term.weight >= 1.0 {
        return Err(HtError::InvalidWeight {
            stand_id: term.stand_id,
            weight: term.weight,
        });
    }
    if !term.t_hat.is_finite() {
        return Err(HtError::NonFiniteTotal {
            stand_id: term.stand_id,
            t_hat: term.t_hat,
        });
    }
    if !term.var_t_hat.is_finite() || term.var_t_hat < 0.0 {
        return Err(HtError::InvalidVariance {
            stand_id: term.stand_id,
            var_t_hat: term.var_t_hat,
        });
    }
    Ok(())
}

/// Computes the Horvitz-Thompson population total, its variance, and a
/// Student-t confidence interval from the sampled stands' estimates.
///
/// With sampled stands `i`, inclusion probabilities `π_i`, and
/// finite-population correction `fpc = 1 - n/N`:
///
/// ```text
/// T̂ = Σ t̂_i / π_i
/// V̂ = fpc * [ Σ (1-π_i)/π_i² t̂_i²
///           + Σ_{i≠k} (π_ik - π_i π_k)/π_ik (t̂_i/π_i)(t̂_k/π_k)
///           + Σ v̂_i/π_i ]
/// ```
///
/// where `π_ik` is the [`joint_inclusion`] approximation driven by
/// `pi_dispersion = Σ_j π_j (1 - π_j)` over the whole frame, the middle
/// sum runs over all ordered pairs of distinct stands, and the last term
/// carries the second-stage (plot) variance into the population variance.
///
/// The standard error is `sqrt(V̂)` (the variance already targets the
/// total, so no further normalizer applies) and the t critical value
/// uses `df = n - 1`.
///
/// # Errors
///
/// Returns [`HtError`] for invalid configuration, fewer than 2 terms,
/// a sample as large as the frame, out-of-range probabilities, weights,
/// or dispersion, non-finite or negative inputs, a non-positive joint
/// probability, or a negative assembled variance. NaN and infinity are
/// never emitted.
pub fn estimate_total(
    terms: &[StandTerm],
    frame_size: usize,
    total_acres: f64,
    pi_dispersion: f64,
    config: &HtConfig,
) -> Result<PopulationEstimate, HtError> {
    config.validate()?;

    let n = terms.len();
    if n < 2 {
        return Err(HtError::InsufficientSample { n });
    }
    if n >= frame_size {
        return Err(HtError::SampleExceedsFrame { n, frame_size });
    }
    if !total_acres.is_finite() || total_acres <= 0.0 {
        return Err(HtError::InvalidAcres { total_acres });
    }
    if !pi_dispersion.is_finite() || pi_dispersion <= 0.0 {
        return Err(HtError::InvalidDispersion {
            dispersion: pi_dispersion,
        });
    }
    for term in terms {
        validate_term(term)?;
    }

    let n_f = n as f64;
    let fpc = 1.0 - n_f / frame_size as f64;

    let total: f64 = terms.iter().map(|t| t.t_hat / t.pi).sum();

    // First term: marginal-inclusion variance of the expanded totals.
    let marginal: f64 = terms
        .iter()
        .map(|t| (1.0 - t.pi) / (t.pi * t.pi) * t.t_hat * t.t_hat)
        .sum();

    // Middle term: pairwise covariance correction over all ordered pairs
    // of distinct stands.
    let mut pairwise = 0.0;
    for (i, a) in terms.iter().enumerate() {
        for (k, b) in terms.iter().enumerate() {
            if i == k {
                continue;
            }
            let pi_joint = joint_inclusion(a.pi, b.pi, pi_dispersion);
            if pi_joint <= 0.0 {
                return Err(HtError::DegenerateJointProbability {
                    stand_a: a.stand_id,
                    stand_b: b.stand_id,
                    pi_joint,
                });
            }
            pairwise +=
                (pi_joint - a.pi * b.pi) / pi_joint * (a.t_hat / a.pi) * (b.t_hat / b.pi);
        }
    }

    // Last term: second-stage (within-stand) variance pushed through the
    // inclusion weights.
    let within: f64 = terms.iter().map(|t| t.var_t_hat / t.pi).sum();

    let variance = fpc * (marginal + pairwise + within);
    if variance < 0.0 {
        return Err(HtError::NegativeVariance { variance });
    }

    let std_error = variance.sqrt();

    let alpha = 1.0 - config.confidence_level();
    let t_dist = StudentsT::new(0.0, 1.0, n_f - 1.0).map_err(|e| HtError::ComputationError {
        message: e.to_string(),
    })?;
    let t_crit = t_dist.inverse_cdf(1.0 - alpha / 2.0);
    let half_width = t_crit * std_error;

    Ok(PopulationEstimate {
        total,
        variance,
        std_error,
        confidence_level: config.confidence_level(),
        half_width,
        lower: total - half_width,
        upper: total + half_width,
        mean_per_acre: total / total_acres,
        half_width_per_acre: half_width / total_acres,
        n_sampled: n,
        stands: terms.to_vec(),
    })
}
