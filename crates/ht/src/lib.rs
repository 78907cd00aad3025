//! Horvitz-Thompson aggregation for the two-stage cruise design.
//!
//! Third stage of the pipeline: combine the sampled stands' totals,
//! their plot-sampling variances, and their first-stage inclusion
//! probabilities into a population total, a finite-population-corrected
//! variance, and a Student-t confidence interval.
//!
//! ```text
//! estimate_total()
//!   ├─ validate terms and design
//!   ├─ T̂ = Σ t̂_i / π_i
//!   ├─ joint_inclusion()          (joint.rs, per ordered pair)
//!   ├─ V̂ = fpc * (marginal + pairwise + within)
//!   └─ SE, t-interval, per-acre conversions
//! ```
//!
//! Degenerate inputs (zero inclusion probability, single-stand samples,
//! non-positive joint probabilities, negative variances) are typed
//! errors; the aggregator never returns NaN or infinity.

pub mod config;
pub mod error;
pub mod result;

pub(crate) mod aggregate;
pub(crate) mod joint;

pub use aggregate::estimate_total;
pub use config::HtConfig;
pub use error::HtError;
pub use joint::joint_inclusion;
pub use result::{PopulationEstimate, StandTerm};
