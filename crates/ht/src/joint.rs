//! Joint inclusion probability approximation.

/// Approximates the joint inclusion probability of two stands in a
/// fixed-size PPS sample from their marginals:
///
/// ```text
/// π_ik ≈ π_i * π_k * [1 - (1 - π_i)(1 - π_k) / d],   d = Σ_j π_j (1 - π_j)
/// ```
///
/// `d` is summed over the whole frame, not just the sampled stands; it
/// measures how far the design is from an all-or-nothing draw. The form
/// is exact in the limits that matter: a certainty stand (`π_i = 1`)
/// gives `π_ik = π_k`, and under equal weights it recovers the
/// without-replacement pair probability to second order. With a tiny `d`
/// (nearly all probability mass on certainties) the bracket can go
/// negative; callers must reject non-positive results before dividing by
/// them (the aggregator surfaces `DegenerateJointProbability`).
pub fn joint_inclusion(pi_i: f64, pi_k: f64, d: f64) -> f64 {
    pi_i * pi_k * (1.0 - (1.0 - pi_i) * (1.0 - pi_k) / d)
}
