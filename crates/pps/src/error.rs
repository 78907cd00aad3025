//! Error types for the cruise-pps crate.

/// Error type for all fallible operations in the cruise-pps crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PpsError {
    /// Returned when the requested sample size is below 2.
    ///
    /// A single-stand sample leaves the pairwise variance term and the
    /// t-distribution degenerate downstream, so it is rejected here.
    #[error("sample size must be >= 2, got {n}")]
    SampleTooSmall {
        /// The invalid sample size.
        n: usize,
    },

    /// Returned when the requested sample size is not smaller than the
    /// number of stands eligible for selection (positive weight).
    ///
    /// A census needs no estimator; `n >= N` is a caller bug.
    #[error("sample size {n} must be smaller than the {n_eligible} eligible stands")]
    SampleExceedsFrame {
        /// The requested sample size.
        n: usize,
        /// Number of stands with positive weight.
        n_eligible: usize,
    },

    /// Returned when a weight is negative or non-finite.
    #[error("weight at index {index} must be finite and non-negative, got {weight}")]
    DegenerateWeight {
        /// Position of the offending weight.
        index: usize,
        /// The offending weight.
        weight: f64,
    },

    /// Returned when the positive weights do not sum to a positive finite
    /// value.
    #[error("positive weights must sum to a positive finite value, got {sum}")]
    InvalidWeights {
        /// The offending sum.
        sum: f64,
    },

    /// Returned when zero Monte Carlo trials are requested.
    #[error("monte carlo trials must be >= 1, got {trials}")]
    InvalidTrials {
        /// The invalid trial count.
        trials: usize,
    },
}
