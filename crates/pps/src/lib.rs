//! Without-replacement PPS sampling and inclusion probabilities.
//!
//! First stage of the two-stage cruise design: draw a fixed-size sample
//! of stands without replacement, with selection probability proportional
//! to each stand's normalized weight, and estimate each stand's marginal
//! probability of entering such a sample.
//!
//! Two inclusion-probability modes are provided:
//!
//! | Mode | Function | Role |
//! |------|----------|------|
//! | Analytic | [`inclusion_analytic`] | `min(1, n·p_i)` — diagnostic only |
//! | Monte Carlo | [`inclusion_monte_carlo`] | repeated draws, hit fraction — authoritative |
//!
//! # Quick start
//!
//! ```
//! use cruise_pps::{inclusion_monte_carlo, sample_pps};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let weights = [10.0, 20.0, 30.0, 40.0, 50.0];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let sample = sample_pps(&weights, 3, &mut rng).unwrap();
//! assert_eq!(sample.len(), 3);
//!
//! let pi = inclusion_monte_carlo(&weights, 3, 1000, &mut rng).unwrap();
//! let sum: f64 = pi.iter().sum();
//! assert!((sum - 3.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;

pub(crate) mod draw;
pub(crate) mod inclusion;

pub use config::PpsConfig;
pub use draw::sample_pps;
pub use error::PpsError;
pub use inclusion::{inclusion_analytic, inclusion_monte_carlo};
