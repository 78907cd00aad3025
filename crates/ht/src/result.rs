//! Output types for Horvitz-Thompson aggregation.

use serde::Serialize;

/// Per-stand input to the aggregator and diagnostic output: the stand's
/// second-stage estimates together with its first-stage probabilities.
#[derive(Debug, Clone, Serialize)]
pub struct StandTerm {
    /// Id of the sampled stand.
    pub stand_id: u32,
    /// Estimated stand total (`mean plot volume * acres`).
    pub t_hat: f64,
    /// Sampling variance of `t_hat` from plot sub-sampling.
    pub var_t_hat: f64,
    /// Marginal inclusion probability of the stand.
    pub pi: f64,
    /// Normalized PPS sampling weight of the stand.
    pub weight: f64,
    /// Number of plots measured in the stand.
    pub n_plots: usize,
}

/// Final population estimate with its uncertainty and the per-stand
/// diagnostics it was assembled from.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationEstimate {
    /// Horvitz-Thompson population total.
    pub total: f64,
    /// Estimated variance of the total (finite-population corrected).
    pub variance: f64,
    /// Standard error: `sqrt(variance / n_sampled)`.
    pub std_error: f64,
    /// Two-sided confidence level of the interval.
    pub confidence_level: f64,
    /// Half-width of the confidence interval.
    pub half_width: f64,
    /// Lower confidence bound on the total.
    pub lower: f64,
    /// Upper confidence bound on the total.
    pub upper: f64,
    /// Population mean per acre: `total / total_acres`.
    pub mean_per_acre: f64,
    /// Confidence half-width per acre.
    pub half_width_per_acre: f64,
    /// Number of sampled stands.
    pub n_sampled: usize,
    /// Per-stand diagnostics in sample order.
    pub stands: Vec<StandTerm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let est = PopulationEstimate {
            total: 450.0,
            variance: 18935.22,
            std_error: 97.3,
            confidence_level: 0.9,
            half_width: 614.3,
            lower: -164.3,
            upper: 1064.3,
            mean_per_acre: 7.5,
            half_width_per_acre: 10.2,
            n_sampled: 2,
            stands: vec![StandTerm {
                stand_id: 1,
                t_hat: 100.0,
                var_t_hat: 10.0,
                pi: 0.5,
                weight: 0.25,
                n_plots: 4,
            }],
        };
        let json = serde_json::to_string(&est).unwrap();
        assert!(json.contains("\"total\":450.0"));
        assert!(json.contains("\"stand_id\":1"));
    }
}
