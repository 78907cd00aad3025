//! Integration tests for Monte Carlo inclusion-probability estimation.

use approx::assert_abs_diff_eq;
use cruise_pps::{inclusion_analytic, inclusion_monte_carlo};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Five stands with sizes 10..50 and weights proportional to size, n=3,
/// 10,000 Monte Carlo draws: the largest stand's inclusion probability
/// should approach min(1, 3*50/150) = 1.0 and the smallest 3*10/150 = 0.2,
/// both within ±0.02.
#[test]
fn five_stand_scenario() {
    let weights = [10.0, 20.0, 30.0, 40.0, 50.0];
    let mut rng = StdRng::seed_from_u64(42);
    let pi = inclusion_monte_carlo(&weights, 3, 10_000, &mut rng).unwrap();

    assert_abs_diff_eq!(pi[4], 1.0, epsilon = 0.02);
    assert_abs_diff_eq!(pi[0], 0.2, epsilon = 0.02);
    // The analytic form should agree for the extreme units too.
    let analytic = inclusion_analytic(&weights, 3).unwrap();
    assert_abs_diff_eq!(analytic[4], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(analytic[0], 0.2, epsilon = 1e-12);
}

/// Σ π_i equals n exactly for any trial count (each draw contributes
/// exactly n hits), and the per-unit estimates stabilize as the trial
/// count grows.
#[test]
fn sum_invariant_and_convergence() {
    let weights = [0.05, 0.1, 0.15, 0.2, 0.22, 0.28];
    let n = 3;

    for &trials in &[100usize, 1000, 10_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let pi = inclusion_monte_carlo(&weights, n, trials, &mut rng).unwrap();
        let sum: f64 = pi.iter().sum();
        assert_abs_diff_eq!(sum, n as f64, epsilon = 1e-9);
    }

    // Two independent 10k-trial estimates should be close to each other:
    // the Monte Carlo noise at S=10,000 is small.
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let pi_a = inclusion_monte_carlo(&weights, n, 10_000, &mut rng_a).unwrap();
    let pi_b = inclusion_monte_carlo(&weights, n, 10_000, &mut rng_b).unwrap();
    for (a, b) in pi_a.iter().zip(&pi_b) {
        assert_abs_diff_eq!(a, b, epsilon = 0.03);
    }
}

/// The Monte Carlo estimate tracks the analytic approximation when all
/// weights are small relative to 1/n.
#[test]
fn monte_carlo_matches_analytic_for_small_weights() {
    let weights = vec![1.0; 20];
    let n = 4;
    let mut rng = StdRng::seed_from_u64(11);
    let pi = inclusion_monte_carlo(&weights, n, 10_000, &mut rng).unwrap();
    let analytic = inclusion_analytic(&weights, n).unwrap();
    for (mc, an) in pi.iter().zip(&analytic) {
        // Equal weights: every unit's true pi is exactly n/N = 0.2.
        assert_abs_diff_eq!(an, &0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(mc, an, epsilon = 0.02);
    }
}
