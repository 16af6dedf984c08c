//! pagesim - A page-replacement simulator comparing FIFO, LRU, OPT and NRU.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Experiment Driver (experiment/)               │   │
//! │  │   capacity sweep → hit rates → table / CSV report        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │               ↓ once                     ↓ per (policy, cap)    │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │ Reference Source         │  │ Replacement Engines      │    │
//! │  │ (workload/)              │  │ (replacer/)              │    │
//! │  │ seeded address walk      │→ │ FIFO | LRU | OPT | NRU   │    │
//! │  │ address → page mapping   │  │ refs × capacity → faults │    │
//! │  └──────────────────────────┘  └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Capacity, Error, config)
//! - [`workload`] - Reference string generation and parsing
//! - [`replacer`] - The four replacement engines
//! - [`experiment`] - Capacity sweep and reporting
//!
//! # Quick Start
//! ```
//! use pagesim::{Capacity, Policy, ReferenceString};
//!
//! let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
//! let capacity = Capacity::new(3).unwrap();
//!
//! for policy in Policy::ALL {
//!     let faults = policy.engine().simulate(&refs, capacity);
//!     println!("{policy}: {faults} faults");
//! }
//! ```

pub mod common;
pub mod experiment;
pub mod replacer;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Capacity, Error, PageId, Result};

pub use experiment::{Experiment, ExperimentConfig, ReportFormat, SweepReport};
pub use replacer::{
    FifoEngine, LruEngine, NruEngine, OptEngine, Policy, ReplacementEngine, RunStats,
};
pub use workload::{ReferenceString, WalkProbabilities};
