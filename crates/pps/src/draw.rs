//! Fixed-size PPS sample draws with exact target marginals.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::PpsError;

/// Validates a weight vector and returns the indices eligible for
/// selection (positive weight).
///
/// Zero weights are allowed — those stands simply can never be drawn.
/// Negative or non-finite weights are rejected.
pub(crate) fn eligible_indices(weights: &[f64]) -> Result<Vec<usize>, PpsError> {
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PpsError::DegenerateWeight { index, weight });
        }
    }
    let eligible: Vec<usize> = (0..weights.len()).filter(|&i| weights[i] > 0.0).collect();
    let sum: f64 = eligible.iter().map(|&i| weights[i]).sum();
    if !eligible.is_empty() && (!sum.is_finite() || sum <= 0.0) {
        return Err(PpsError::InvalidWeights { sum });
    }
    Ok(eligible)
}

/// Target marginal inclusion probabilities for a fixed-size draw of `n`
/// among the `eligible` units, aligned with `weights`.
///
/// Starts from `n * w_i / total` and iteratively caps units that reach 1
/// (certainties), renormalizing the remaining slots over the remaining
/// units until nothing overflows. Ineligible units keep probability 0.
pub(crate) fn target_inclusion(weights: &[f64], n: usize, eligible: &[usize]) -> Vec<f64> {
    let mut pi = vec![0.0; weights.len()];
    let mut pool: Vec<usize> = eligible.to_vec();
    let mut slots = n;

    while slots > 0 && !pool.is_empty() {
        let total: f64 = pool.iter().map(|&i| weights[i]).sum();
        let mut certain = Vec::new();
        for &i in &pool {
            if slots as f64 * weights[i] >= total {
                certain.push(i);
            }
        }
        if certain.is_empty() {
            for &i in &pool {
                pi[i] = slots as f64 * weights[i] / total;
            }
            break;
        }
        for &i in &certain {
            pi[i] = 1.0;
        }
        pool.retain(|i| !certain.contains(i));
        slots -= certain.len();
    }
    pi
}

/// Draws `n` distinct indices with marginal inclusion probabilities
/// matching the fixed-size PPS design: `π_i = min(1, n' * w_i / total)`
/// after certainty capping (see [`target_inclusion`]).
///
/// Certainty units enter every sample. The remaining slots are filled by
/// systematic sampling over the fractional units: their probabilities are
/// laid out on a line of length equal to the open slot count, and a unit
/// is selected when one of the unit-spaced grid points (random start in
/// [0, 1)) lands in its segment. Each fractional probability is below 1,
/// so no unit can catch two grid points and the sample size is exact.
/// The unit order is shuffled first so every pair retains a positive
/// chance of co-occurring.
///
/// Zero-weight units are excluded from eligibility and never appear in
/// the result. Certainty units come first in the returned indices.
///
/// # Errors
///
/// Returns [`PpsError`] if `n < 2`, `n` is not smaller than the count of
/// positive-weight units, or any weight is negative / non-finite.
pub fn sample_pps(weights: &[f64], n: usize, rng: &mut impl Rng) -> Result<Vec<usize>, PpsError> {
    if n < 2 {
        return Err(PpsError::SampleTooSmall { n });
    }
    let eligible = eligible_indices(weights)?;
    if n >= eligible.len() {
        return Err(PpsError::SampleExceedsFrame {
            n,
            n_eligible: eligible.len(),
        });
    }

    let pi = target_inclusion(weights, n, &eligible);
    let mut selected: Vec<usize> = eligible.iter().copied().filter(|&i| pi[i] >= 1.0).collect();
    let mut fractional: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|&i| pi[i] > 0.0 && pi[i] < 1.0)
        .collect();

    let slots = n - selected.len();
    if slots == 0 {
        return Ok(selected);
    }

    fractional.shuffle(rng);

    let mut cdf = Vec::with_capacity(fractional.len());
    let mut acc = 0.0;
    for &i in &fractional {
        acc += pi[i];
        cdf.push(acc);
    }
    // The fractional probabilities sum to the open slot count exactly in
    // real arithmetic; force the last entry to that value so the final
    // grid point cannot fall off the end under float accumulation.
    if let Some(last) = cdf.last_mut() {
        *last = slots as f64;
    }

    let start: f64 = rng.random::<f64>();
    for j in 0..slots {
        let point = start + j as f64;
        let pos = cdf.partition_point(|&c| c <= point).min(fractional.len() - 1);
        selected.push(fractional[pos]);
    }

    Ok(selected)
}
