//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers and sizes (PageId, Capacity)

mod capacity;
pub mod config;
pub mod error;
mod page_id;

pub use capacity::Capacity;
pub use error::{Error, Result};
pub use page_id::PageId;
