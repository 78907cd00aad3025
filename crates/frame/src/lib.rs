//! Population frame for two-stage PPS forest inventory sampling.
//!
//! A [`Frame`] is an immutable, validated list of [`Stand`]s (primary
//! sampling units) with normalized probability-proportional-to-size
//! weights cached at construction:
//!
//! ```text
//! p_i = sqrt(age_i) * acres_i / Σ_j sqrt(age_j) * acres_j
//! ```
//!
//! The weight is fixed at design time; inclusion probabilities and sample
//! draws (the `cruise-pps` crate) derive from it. Stands also carry a true
//! per-acre mean volume and coefficient of variation used only to simulate
//! plot measurements and score estimates against ground truth.
//!
//! # Quick start
//!
//! ```
//! use cruise_frame::synthetic_frame;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let frame = synthetic_frame(40, &mut rng).unwrap();
//! assert_eq!(frame.len(), 40);
//! assert!(frame.true_total() > 0.0);
//! ```

pub mod error;
pub mod frame;
pub mod stand;
pub mod synthetic;

pub use error::FrameError;
pub use frame::Frame;
pub use stand::Stand;
pub use synthetic::synthetic_frame;
