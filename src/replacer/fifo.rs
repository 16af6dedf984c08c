//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::{Capacity, PageId};
use crate::replacer::{tally, Access, ReplacementEngine, RunStats};
use crate::workload::ReferenceString;

/// Evicts pages in the order they were admitted.
///
/// Hits do not reorder anything, which is what separates it from LRU.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoEngine;

impl ReplacementEngine for FifoEngine {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&self, refs: &ReferenceString, capacity: Capacity) -> RunStats {
        let mut frames = FifoFrames::new(capacity, refs.len());
        tally(self.name(), capacity, refs.iter().map(|&page| frames.access(page)))
    }
}

/// Resident set for one FIFO run.
struct FifoFrames {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    capacity: usize,
}

impl FifoFrames {
    /// Never reserves more than `references` slots, however large the pool.
    fn new(capacity: Capacity, references: usize) -> Self {
        let reserve = capacity.get().min(references);
        Self {
            queue: VecDeque::with_capacity(reserve),
            resident: HashSet::with_capacity(reserve),
            capacity: capacity.get(),
        }
    }

    fn access(&mut self, page: PageId) -> Access {
        if self.resident.contains(&page) {
            return Access::Hit;
        }

        let evicted = if self.queue.len() == self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            self.resident.remove(&old);
        }

        self.queue.push_back(page);
        self.resident.insert(page);
        Access::Miss { evicted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(capacity: usize) -> FifoFrames {
        FifoFrames::new(Capacity::new(capacity).unwrap(), 32)
    }

    fn miss(evicted: Option<u32>) -> Access {
        Access::Miss {
            evicted: evicted.map(PageId::new),
        }
    }

    #[test]
    fn test_fifo_basic() {
        let mut f = frames(3);

        assert_eq!(f.access(PageId::new(0)), miss(None));
        assert_eq!(f.access(PageId::new(1)), miss(None));
        assert_eq!(f.access(PageId::new(2)), miss(None));

        // Should evict in FIFO order
        assert_eq!(f.access(PageId::new(3)), miss(Some(0)));
        assert_eq!(f.access(PageId::new(4)), miss(Some(1)));
        assert_eq!(f.access(PageId::new(5)), miss(Some(2)));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut f = frames(2);

        f.access(PageId::new(0));
        f.access(PageId::new(1));
        assert_eq!(f.access(PageId::new(0)), Access::Hit); // should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(f.access(PageId::new(2)), miss(Some(0)));
        assert_eq!(f.access(PageId::new(3)), miss(Some(1)));
    }

    #[test]
    fn test_fifo_queue_matches_resident_set() {
        let mut f = frames(3);
        for p in [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5] {
            f.access(PageId::new(p));
            assert!(f.queue.len() <= 3);
            assert_eq!(f.queue.len(), f.resident.len());
            assert!(f.queue.iter().all(|p| f.resident.contains(p)));
        }
    }

    #[test]
    fn test_fifo_belady_anomaly() {
        let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let three = FifoEngine.simulate(&refs, Capacity::new(3).unwrap());
        let four = FifoEngine.simulate(&refs, Capacity::new(4).unwrap());
        assert_eq!(three, 9);
        assert_eq!(four, 10);
    }
}
