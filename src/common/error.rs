//! Error types for pagesim.
//!
//! The replacement engines themselves cannot fail. Everything here guards the
//! boundary where callers build capacities, workloads and reports.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame pool must hold at least one page.
    #[error("Capacity must be at least 1 frame, got {0}")]
    InvalidCapacity(usize),

    /// The capacity sweep bounds are unusable.
    #[error("Invalid frame range {min}..={max}")]
    InvalidFrameRange { min: usize, max: usize },

    /// The address generator was asked for zero instructions.
    #[error("Address space must contain at least one instruction")]
    EmptyAddressSpace,

    /// Zero instructions per page would make every address unmappable.
    #[error("Instructions per page must be at least 1, got {0}")]
    InvalidPageSize(u32),

    /// Walk probabilities must each be in [0, 1] and sum to at most 1.
    #[error("Invalid walk probabilities: sequential {sequential}, lower jump {lower_jump}")]
    InvalidProbabilities { sequential: f64, lower_jump: f64 },

    /// A literal page list contained something other than page numbers.
    #[error("Invalid page list entry: {0:?}")]
    InvalidPageList(String),

    /// No replacement policy goes by this name.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// An experiment needs at least one policy to compare.
    #[error("No replacement policies selected")]
    NoPolicies,

    /// Report formats are `table` and `csv`.
    #[error("Unknown report format: {0:?}")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "Capacity must be at least 1 frame, got 0");

        let err = Error::InvalidFrameRange { min: 8, max: 4 };
        assert_eq!(format!("{}", err), "Invalid frame range 8..=4");

        let err = Error::InvalidPageList("x".to_string());
        assert_eq!(format!("{}", err), "Invalid page list entry: \"x\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::EmptyAddressSpace.source().is_none());
    }
}
