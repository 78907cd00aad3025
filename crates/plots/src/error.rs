//! Error types for the cruise-plots crate.

/// Error type for all fallible operations in the cruise-plots crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlotError {
    /// Returned when the plot spacing is non-finite or not positive.
    #[error("plot spacing must be finite and positive, got {spacing}")]
    InvalidSpacing {
        /// The invalid spacing (acres per plot).
        spacing: f64,
    },

    /// Returned when the minimum plot count is below 2.
    ///
    /// With a single plot the within-stand variance is undefined.
    #[error("min plots must be >= 2, got {min_plots}")]
    MinPlotsTooSmall {
        /// The invalid minimum.
        min_plots: usize,
    },

    /// Returned when the maximum plot count is below the minimum.
    #[error("max plots {max_plots} must be >= min plots {min_plots}")]
    MaxBelowMin {
        /// Configured minimum plot count.
        min_plots: usize,
        /// Configured maximum plot count.
        max_plots: usize,
    },

    /// Returned when the volume cap is non-finite or not positive.
    #[error("volume cap must be finite and positive, got {cap}")]
    InvalidCap {
        /// The invalid cap.
        cap: f64,
    },

    /// Returned when a stand ends up with fewer than 2 plots.
    #[error("stand {id}: {n_plots} plots is not enough to estimate variance (need >= 2)")]
    InsufficientPlots {
        /// Id of the offending stand.
        id: u32,
        /// The allocated plot count.
        n_plots: usize,
    },

    /// Returned when the normal base distribution cannot be constructed.
    ///
    /// The `message` field is a `String` because rand_distr errors do not
    /// carry the parameters.
    #[error("normal construction failed (mean={mean}, sd={sd}): {message}")]
    NormalConstruction {
        /// Mean that caused the failure.
        mean: f64,
        /// Standard deviation that caused the failure.
        sd: f64,
        /// Description of the failure.
        message: String,
    },

    /// Returned when rejection sampling cannot land inside the truncation
    /// range within the attempt budget.
    #[error("truncated normal (mean={mean}, sd={sd}) produced no draw in [{lo}, {hi}]")]
    TruncationFailed {
        /// Mean of the base normal.
        mean: f64,
        /// Standard deviation of the base normal.
        sd: f64,
        /// Lower truncation bound.
        lo: f64,
        /// Upper truncation bound.
        hi: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_spacing() {
        let e = PlotError::InvalidSpacing { spacing: 0.0 };
        assert_eq!(e.to_string(), "plot spacing must be finite and positive, got 0");
    }

    #[test]
    fn error_min_plots_too_small() {
        let e = PlotError::MinPlotsTooSmall { min_plots: 1 };
        assert_eq!(e.to_string(), "min plots must be >= 2, got 1");
    }

    #[test]
    fn error_max_below_min() {
        let e = PlotError::MaxBelowMin {
            min_plots: 4,
            max_plots: 3,
        };
        assert_eq!(e.to_string(), "max plots 3 must be >= min plots 4");
    }

    #[test]
    fn error_invalid_cap() {
        let e = PlotError::InvalidCap { cap: f64::NAN };
        assert_eq!(e.to_string(), "volume cap must be finite and positive, got NaN");
    }

    #[test]
    fn error_insufficient_plots() {
        let e = PlotError::InsufficientPlots { id: 9, n_plots: 1 };
        assert_eq!(
            e.to_string(),
            "stand 9: 1 plots is not enough to estimate variance (need >= 2)"
        );
    }

    #[test]
    fn error_normal_construction() {
        let e = PlotError::NormalConstruction {
            mean: 100.0,
            sd: -1.0,
            message: "standard deviation must be non-negative".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "normal construction failed (mean=100, sd=-1): standard deviation must be non-negative"
        );
    }

    #[test]
    fn error_truncation_failed() {
        let e = PlotError::TruncationFailed {
            mean: 1000.0,
            sd: 1.0,
            lo: 0.0,
            hi: 600.0,
        };
        assert_eq!(
            e.to_string(),
            "truncated normal (mean=1000, sd=1) produced no draw in [0, 600]"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PlotError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PlotError>();
    }
}
