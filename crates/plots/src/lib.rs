//! Second-stage plot sampling for the two-stage cruise design.
//!
//! Given a selected stand, this crate decides how many plots to measure
//! (`ceil(acres / spacing)` clamped to a configured range), simulates a
//! per-acre volume measurement on each plot from a truncated normal, and
//! reduces the plots to the stand-level estimates the Horvitz-Thompson
//! aggregator consumes: `t_hat` and `var_t_hat`.
//!
//! Observations are truncated to `[0, volume_cap]` by rejection, never by
//! clipping, so the distribution keeps its shape above zero.
//!
//! # Quick start
//!
//! ```
//! use cruise_frame::Stand;
//! use cruise_plots::{PlotConfig, cruise_stand};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let stand = Stand::new(1, 25.0, 36.0, 1500.0, 0.25);
//! let config = PlotConfig::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let sample = cruise_stand(&stand, &config, &mut rng).unwrap();
//! assert!(sample.n_plots() >= 2);
//! ```

pub mod config;
pub mod error;
pub mod result;

pub(crate) mod cruise;
pub(crate) mod truncnorm;

pub use config::PlotConfig;
pub use cruise::{allocate_plots, cruise_stand};
pub use error::PlotError;
pub use result::StandSample;
pub use truncnorm::truncated_normal;
