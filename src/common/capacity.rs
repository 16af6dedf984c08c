//! Frame pool capacity type.

use std::fmt;
use std::num::NonZeroUsize;

use crate::common::{Error, Result};

/// Number of frames available to an engine for one run.
///
/// A zero-frame pool has no defined victim selection, so it is rejected
/// here, before any engine runs.
///
/// # Example
/// ```
/// use pagesim::Capacity;
///
/// let cap = Capacity::new(4).unwrap();
/// assert_eq!(cap.get(), 4);
/// assert!(Capacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Create a capacity of `frames` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(Capacity)
            .ok_or(Error::InvalidCapacity(frames))
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(frames: NonZeroUsize) -> Self {
        Capacity(frames)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        Capacity::new(frames)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_new() {
        let cap = Capacity::new(10).unwrap();
        assert_eq!(cap.get(), 10);
    }

    #[test]
    fn test_capacity_rejects_zero() {
        match Capacity::new(0) {
            Err(Error::InvalidCapacity(0)) => {}
            other => panic!("Expected InvalidCapacity, got {:?}", other),
        }
        assert!(Capacity::try_from(0usize).is_err());
    }

    #[test]
    fn test_capacity_ordering() {
        assert!(Capacity::new(4).unwrap() < Capacity::new(5).unwrap());
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(format!("{}", Capacity::new(4).unwrap()), "4 frames");
    }
}
