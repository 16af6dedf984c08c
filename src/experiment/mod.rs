//! Experiment driver.
//!
//! Builds (or accepts) one reference string, replays it through every
//! selected policy at every capacity in the sweep, and renders the hit rates.
//!
//! # Components
//! - [`ExperimentConfig`] - Workload and sweep parameters
//! - [`Experiment`] - Runs the sweep, optionally one thread per policy
//! - [`SweepReport`] - Results, rendered as a table or CSV

mod report;
mod sweep;

pub use report::{PolicyResult, ReportFormat, SweepReport, SweepRow};
pub use sweep::{Experiment, ExperimentConfig};
