//! Trial orchestration for the two-stage cruise estimator.
//!
//! Wires the three stage crates into a pipeline and runs it, once
//! ([`run_trial`]) or repeatedly ([`run_simulation`]):
//!
//! ```text
//! Design::build()          — validate configs, Monte Carlo π (once per design)
//! run_trial()
//!   ├─ cruise_pps::sample_pps()      stage 1: draw stands
//!   ├─ cruise_plots::cruise_stand()  stage 2: cruise each stand
//!   └─ cruise_ht::estimate_total()   stage 3: aggregate
//! run_simulation()         — independent seeded trials, bias + coverage
//! ```
//!
//! The frame and design are immutable and shared read-only across trials;
//! each trial owns its RNG, seeded from the base seed and trial index.
//! Failed trials are discarded samples, not fatal errors.

pub mod design;
pub mod error;
pub mod result;

pub(crate) mod simulate;
pub(crate) mod trial;

pub use design::Design;
pub use error::SimError;
pub use result::SimulationSummary;
pub use simulate::run_simulation;
pub use trial::{Trial, run_trial};
