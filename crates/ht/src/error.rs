//! Error types for the cruise-ht crate.

/// Error type for all fallible operations in the cruise-ht crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HtError {
    /// Returned when fewer than 2 sampled stands are supplied.
    ///
    /// One stand leaves the pairwise variance term empty and the
    /// t-distribution at zero degrees of freedom.
    #[error("need at least 2 sampled stands, got {n}")]
    InsufficientSample {
        /// Number of stands supplied.
        n: usize,
    },

    /// Returned when the sample is not smaller than the frame.
    #[error("sample of {n} stands must be smaller than the frame of {frame_size}")]
    SampleExceedsFrame {
        /// Number of sampled stands.
        n: usize,
        /// Number of stands in the full frame.
        frame_size: usize,
    },

    /// Returned when the confidence level is outside (0, 1).
    #[error("confidence level must be in (0, 1), got {level}")]
    InvalidConfidenceLevel {
        /// The invalid level.
        level: f64,
    },

    /// Returned when the frame's total acreage is non-finite or not positive.
    #[error("total acres must be finite and positive, got {total_acres}")]
    InvalidAcres {
        /// The invalid acreage.
        total_acres: f64,
    },

    /// Returned when a stand's inclusion probability is outside (0, 1].
    ///
    /// A zero probability would divide by zero in the total; it must be
    /// rejected upstream at sampling time and is a hard error here.
    #[error("stand {stand_id}: inclusion probability must be in (0, 1], got {pi}")]
    InvalidInclusion {
        /// Id of the offending stand.
        stand_id: u32,
        /// The invalid inclusion probability.
        pi: f64,
    },

    /// Returned when a stand's sampling weight is outside (0, 1).
    #[error("stand {stand_id}: sampling weight must be in (0, 1), got {weight}")]
    InvalidWeight {
        /// Id of the offending stand.
        stand_id: u32,
        /// The invalid weight.
        weight: f64,
    },

    /// Returned when a stand's total estimate is non-finite.
    #[error("stand {stand_id}: total estimate is not finite ({t_hat})")]
    NonFiniteTotal {
        /// Id of the offending stand.
        stand_id: u32,
        /// The offending estimate.
        t_hat: f64,
    },

    /// Returned when a stand's variance estimate is negative or non-finite.
    #[error("stand {stand_id}: variance estimate must be finite and non-negative, got {var_t_hat}")]
    InvalidVariance {
        /// Id of the offending stand.
        stand_id: u32,
        /// The offending variance.
        var_t_hat: f64,
    },

    /// Returned when the design's inclusion dispersion `Σ π_j (1 - π_j)`
    /// is non-finite or not positive.
    ///
    /// A zero dispersion means every frame probability is 0 or 1; the
    /// joint-inclusion approximation has nothing to work with.
    #[error("inclusion dispersion must be finite and positive, got {dispersion}")]
    InvalidDispersion {
        /// The invalid dispersion.
        dispersion: f64,
    },

    /// Returned when the joint-inclusion approximation collapses to a
    /// non-positive value for a pair of stands.
    ///
    /// This happens when the dispersion is small against the pair's
    /// exclusion mass `(1-π_i)(1-π_k)`; dividing by the collapsed joint
    /// probability would poison the variance.
    #[error("stands {stand_a} and {stand_b}: joint inclusion probability is not positive ({pi_joint})")]
    DegenerateJointProbability {
        /// Id of the first stand of the pair.
        stand_a: u32,
        /// Id of the second stand of the pair.
        stand_b: u32,
        /// The degenerate joint probability.
        pi_joint: f64,
    },

    /// Returned when the assembled variance is negative.
    ///
    /// The pairwise correction term can push an approximated variance
    /// below zero; surfacing it beats emitting a NaN standard error.
    #[error("population variance is negative ({variance})")]
    NegativeVariance {
        /// The negative variance.
        variance: f64,
    },

    /// Returned when a distribution computation fails.
    ///
    /// The `message` field is a `String` because statrs errors do not
    /// implement `Clone`.
    #[error("computation failed: {message}")]
    ComputationError {
        /// Description of the failure.
        message: String,
    },
}
