//! Validated population frame with cached PPS weights.

use std::collections::HashSet;

use crate::error::FrameError;
use crate::stand::Stand;

/// An immutable, validated collection of stands with precomputed
/// normalized PPS sampling weights.
///
/// Construction validates every stand and normalizes the raw weights
/// (`sqrt(age) * acres`) to sum to 1. The frame is never mutated after
/// construction; sampling designs and repeated simulation trials share
/// it read-only.
///
/// # Example
///
/// ```
/// use cruise_frame::{Frame, Stand};
///
/// let frame = Frame::new(vec![
///     Stand::new(1, 10.0, 16.0, 1500.0, 0.3),
///     Stand::new(2, 30.0, 25.0, 2100.0, 0.2),
/// ])
/// .unwrap();
///
/// assert_eq!(frame.len(), 2);
/// let sum: f64 = frame.weights().iter().sum();
/// assert!((sum - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    stands: Vec<Stand>,
    weights: Vec<f64>,
}

impl Frame {
    /// Builds a frame from a list of stands, validating each one and
    /// computing normalized sampling weights.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if the list is empty, an id repeats, any
    /// stand attribute is out of range, or every raw weight is zero.
    pub fn new(stands: Vec<Stand>) -> Result<Self, FrameError> {
        if stands.is_empty() {
            return Err(FrameError::EmptyFrame);
        }

        let mut seen = HashSet::with_capacity(stands.len());
        for s in &stands {
            if !seen.insert(s.id) {
                return Err(FrameError::DuplicateStandId { id: s.id });
            }
            if !s.acres.is_finite() || s.acres <= 0.0 {
                return Err(FrameError::InvalidAcres {
                    id: s.id,
                    acres: s.acres,
                });
            }
            if !s.age.is_finite() || s.age < 0.0 {
                return Err(FrameError::InvalidAge { id: s.id, age: s.age });
            }
            if !s.mean_volume.is_finite() || s.mean_volume < 0.0 {
                return Err(FrameError::InvalidVolume {
                    id: s.id,
                    mean_volume: s.mean_volume,
                });
            }
            if !s.cv.is_finite() || s.cv < 0.0 {
                return Err(FrameError::InvalidCv { id: s.id, cv: s.cv });
            }
        }

        let raw: Vec<f64> = stands.iter().map(Stand::raw_weight).collect();
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Err(FrameError::ZeroTotalWeight);
        }
        let weights: Vec<f64> = raw.iter().map(|w| w / total).collect();

        Ok(Self { stands, weights })
    }

    /// Returns the stands in frame order.
    pub fn stands(&self) -> &[Stand] {
        &self.stands
    }

    /// Returns the normalized sampling weights, aligned with [`stands`].
    ///
    /// All entries are finite and non-negative and sum to 1. A zero-age
    /// stand has weight 0 and can never be drawn.
    ///
    /// [`stands`]: Frame::stands
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of stands in the frame.
    pub fn len(&self) -> usize {
        self.stands.len()
    }

    /// Returns `true` if the frame has no stands (never true for a
    /// constructed frame).
    pub fn is_empty(&self) -> bool {
        self.stands.is_empty()
    }

    /// Total frame acreage.
    pub fn total_acres(&self) -> f64 {
        self.stands.iter().map(|s| s.acres).sum()
    }

    /// True population total volume (simulation ground truth).
    pub fn true_total(&self) -> f64 {
        self.stands.iter().map(Stand::true_total).sum()
    }
}
