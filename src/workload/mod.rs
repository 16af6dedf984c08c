//! Reference source - where page reference strings come from.
//!
//! # Components
//! - [`AddressGenerator`] - Seeded biased random walk over instruction addresses
//! - [`WalkProbabilities`] - Branch probabilities of that walk
//! - [`ReferenceString`] - The page sequence handed to the engines

mod generator;
mod reference_string;

pub use generator::{AddressGenerator, WalkProbabilities};
pub use reference_string::ReferenceString;
