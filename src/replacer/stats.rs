//! Per-run statistics.

use std::fmt;

/// Outcome of one `(policy, capacity)` run.
///
/// Unlike a live counter this is a plain value: it can be printed,
/// compared and collected across threads freely.
///
/// # Example
/// ```
/// use pagesim::RunStats;
///
/// let stats = RunStats { references: 10, faults: 3, evictions: 1 };
/// assert_eq!(stats.hits(), 7);
/// assert_eq!(stats.hit_rate(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Length of the reference string.
    pub references: usize,

    /// Number of references that missed (page faults).
    pub faults: usize,

    /// Number of faults that had to push a resident page out.
    pub evictions: usize,
}

impl RunStats {
    pub fn hits(&self) -> usize {
        self.references - self.faults
    }

    /// Hit rate (0.0 to 1.0). An empty reference string has rate 0.
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits() as f64 / self.references as f64
        }
    }

    /// Fault rate (0.0 to 1.0). An empty reference string has rate 0.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
