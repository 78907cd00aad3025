//! Synthetic frame generation for demos and simulation studies.

use rand::Rng;

use crate::error::FrameError;
use crate::frame::Frame;
use crate::stand::Stand;

/// Acreage range for synthetic stands.
const ACRES_RANGE: (f64, f64) = (10.0, 120.0);
/// Age range for synthetic stands (years).
const AGE_RANGE: (f64, f64) = (15.0, 90.0);
/// Per-acre volume range for synthetic stands.
const VOLUME_RANGE: (f64, f64) = (800.0, 3200.0);
/// Within-stand coefficient-of-variation range.
const CV_RANGE: (f64, f64) = (0.1, 0.4);

/// Generates a synthetic population frame of `n_stands` stands.
///
/// Stand attributes are drawn uniformly from fixed ranges chosen to look
/// like a small working forest: 10-120 acre stands aged 15-90 years with
/// 800-3200 units of volume per acre and within-stand CVs of 0.1-0.4.
/// Ids are assigned 1..=n_stands in order.
///
/// # Errors
///
/// Returns [`FrameError::EmptyFrame`] if `n_stands` is zero.
pub fn synthetic_frame(n_stands: usize, rng: &mut impl Rng) -> Result<Frame, FrameError> {
    let stands: Vec<Stand> = (0..n_stands)
        .map(|i| {
            Stand::new(
                (i + 1) as u32,
                rng.random_range(ACRES_RANGE.0..=ACRES_RANGE.1),
                rng.random_range(AGE_RANGE.0..=AGE_RANGE.1),
                rng.random_range(VOLUME_RANGE.0..=VOLUME_RANGE.1),
                rng.random_range(CV_RANGE.0..=CV_RANGE.1),
            )
        })
        .collect();
    Frame::new(stands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_synthetic_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let frame = synthetic_frame(25, &mut rng).unwrap();
        assert_eq!(frame.len(), 25);
        for (i, s) in frame.stands().iter().enumerate() {
            assert_eq!(s.id, (i + 1) as u32);
            assert!((ACRES_RANGE.0..=ACRES_RANGE.1).contains(&s.acres));
            assert!((AGE_RANGE.0..=AGE_RANGE.1).contains(&s.age));
            assert!((VOLUME_RANGE.0..=VOLUME_RANGE.1).contains(&s.mean_volume));
            assert!((CV_RANGE.0..=CV_RANGE.1).contains(&s.cv));
        }
    }

    #[test]
    fn test_synthetic_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let f1 = synthetic_frame(10, &mut rng1).unwrap();
        let f2 = synthetic_frame(10, &mut rng2).unwrap();
        assert_eq!(f1.stands(), f2.stands());
    }

    #[test]
    fn test_synthetic_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = synthetic_frame(0, &mut rng);
        assert!(matches!(result, Err(FrameError::EmptyFrame)));
    }
}
