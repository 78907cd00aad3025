//! Marginal inclusion probabilities for fixed-size PPS samples.

use rand::Rng;

use crate::draw::{eligible_indices, sample_pps};
use crate::error::PpsError;

/// Analytic approximation of the marginal inclusion probabilities:
/// `π_i ≈ min(1, n * p_i)` with `p_i` the normalized weight.
///
/// Fast but biased when any weight is large relative to `1/n`: the
/// product is simply capped at 1, while the realized draw renormalizes
/// the remaining slots over the remaining units after capping. Use
/// [`inclusion_monte_carlo`] for the authoritative estimate; this form
/// is a diagnostic.
///
/// # Errors
///
/// Returns [`PpsError`] on invalid sample size or degenerate weights.
pub fn inclusion_analytic(weights: &[f64], n: usize) -> Result<Vec<f64>, PpsError> {
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
    let total: f64 = eligible.iter().map(|&i| weights[i]).sum();
    Ok(weights
        .iter()
        .map(|&w| (n as f64 * w / total).min(1.0))
        .collect())
}

/// Monte Carlo estimate of the marginal inclusion probabilities.
///
/// Draws `trials` independent without-replacement PPS samples of size `n`
/// and sets `π_i` to the fraction of trials in which unit `i` was drawn.
/// As `trials` grows, `Σ π_i` converges to `n` and each `π_i` to its true
/// marginal probability.
///
/// # Errors
///
/// Returns [`PpsError`] on invalid sample size, degenerate weights, or
/// `trials == 0`.
pub fn inclusion_monte_carlo(
    weights: &[f64],
    n: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, PpsError> {
    if trials == 0 {
        return Err(PpsError::InvalidTrials { trials });
    }

    let mut hits = vec![0usize; weights.len()];
    for _ in 0..trials {
        for i in sample_pps(weights, n, rng)? {
            hits[i] += 1;
        }
    }
    Ok(hits
        .into_iter()
        .map(|h| h as f64 / trials as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_analytic_basic() {
        // Weights proportional to 10,20,30,40,50; n=3.
        let weights = [10.0, 20.0, 30.0, 40.0, 50.0];
        let pi = inclusion_analytic(&weights, 3).unwrap();
        assert_abs_diff_eq!(pi[0], 3.0 * 10.0 / 150.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pi[4], 1.0, epsilon = 1e-12); // 3*50/150 = 1.0
    }

    #[test]
    fn test_analytic_caps_at_one() {
        let weights = [1.0, 1.0, 1.0, 97.0];
        let pi = inclusion_analytic(&weights, 3).unwrap();
        assert_abs_diff_eq!(pi[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_analytic_zero_weight() {
        let weights = [10.0, 0.0, 20.0, 30.0];
        let pi = inclusion_analytic(&weights, 2).unwrap();
        assert_abs_diff_eq!(pi[1], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_monte_carlo_bounds_and_sum() {
        let weights = [0.1, 0.15, 0.2, 0.25, 0.3];
        let mut rng = StdRng::seed_from_u64(42);
        let pi = inclusion_monte_carlo(&weights, 3, 2000, &mut rng).unwrap();
        for &p in &pi {
            assert!((0.0..=1.0).contains(&p), "pi out of range: {p}");
        }
        let sum: f64 = pi.iter().sum();
        // Every trial draws exactly 3 units, so the sum is exactly 3.
        assert_abs_diff_eq!(sum, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monte_carlo_zero_weight_unit() {
        let weights = [0.3, 0.0, 0.3, 0.4];
        let mut rng = StdRng::seed_from_u64(1);
        let pi = inclusion_monte_carlo(&weights, 2, 500, &mut rng).unwrap();
        assert_abs_diff_eq!(pi[1], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_monte_carlo_ordering_matches_weights() {
        let weights = [0.05, 0.1, 0.2, 0.65];
        let mut rng = StdRng::seed_from_u64(3);
        let pi = inclusion_monte_carlo(&weights, 2, 5000, &mut rng).unwrap();
        assert!(pi[3] > pi[2]);
        assert!(pi[2] > pi[1]);
        assert!(pi[1] > pi[0]);
    }

    #[test]
    fn test_monte_carlo_zero_trials() {
        let weights = [0.5, 0.3, 0.2];
        let mut rng = StdRng::seed_from_u64(0);
        let result = inclusion_monte_carlo(&weights, 2, 0, &mut rng);
        assert!(matches!(result, Err(PpsError::InvalidTrials { trials: 0 })));
    }

    #[test]
    fn test_analytic_errors() {
        assert!(matches!(
            inclusion_analytic(&[0.5, 0.5], 1),
            Err(PpsError::SampleTooSmall { n: 1 })
        ));
        assert!(matches!(
            inclusion_analytic(&[0.5, 0.5], 2),
            Err(PpsError::SampleExceedsFrame { .. })
        ));
        assert!(matches!(
            inclusion_analytic(&[0.5, -0.5, 1.0], 2),
            Err(PpsError::DegenerateWeight { index: 1, .. })
        ));
    }
}
