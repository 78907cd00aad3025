//! Primary sampling unit: a forest stand.

use serde::{Deserialize, Serialize};

/// A single forest stand (primary sampling unit).
///
/// `mean_volume` and `cv` describe the stand's true per-acre volume
/// distribution and are used only to simulate plot measurements and to
/// compute ground-truth totals. The estimator itself never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stand {
    /// Unique stand identifier.
    pub id: u32,
    /// Stand area in acres. Must be finite and positive.
    pub acres: f64,
    /// Stand age in years, the auxiliary covariate for the sampling weight.
    /// Must be finite and non-negative; a zero-age stand gets weight 0.
    pub age: f64,
    /// True mean volume per acre (simulation ground truth).
    pub mean_volume: f64,
    /// Coefficient of variation of per-acre volume within the stand
    /// (simulation ground truth).
    pub cv: f64,
}

impl Stand {
    /// Creates a new stand.
    pub fn new(id: u32, acres: f64, age: f64, mean_volume: f64, cv: f64) -> Self {
        Self {
            id,
            acres,
            age,
            mean_volume,
            cv,
        }
    }

    /// Raw (unnormalized) sampling weight: `sqrt(age) * acres`.
    ///
    /// Monotone in both covariates, fixed at design time; the frame
    /// normalizes these across all stands.
    pub fn raw_weight(&self) -> f64 {
        self.age.sqrt() * self.acres
    }

    /// True stand total volume: `mean_volume * acres` (simulation ground
    /// truth).
    pub fn true_total(&self) -> f64 {
        self.mean_volume * self.acres
    }
}
