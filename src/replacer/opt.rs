//! OPT (Belady's optimal) replacement policy.
//!
//! OPT needs to see the future, so it only works on a complete reference
//! string. Rather than scanning forward from every fault for every resident
//! page, the next occurrence of each position is computed once in a single
//! backward pass and cached per slot.

use std::collections::HashMap;

use crate::common::{Capacity, PageId};
use crate::replacer::{tally, Access, ReplacementEngine, RunStats};
use crate::workload::ReferenceString;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Pages never referenced again count as used at position N and are always
/// preferred. Among equally distant pages the lowest slot wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptEngine;

impl ReplacementEngine for OptEngine {
    fn name(&self) -> &'static str {
        "OPT"
    }

    fn run(&self, refs: &ReferenceString, capacity: Capacity) -> RunStats {
        let next = next_occurrences(refs.as_slice());
        let mut frames = OptFrames::new(capacity, refs.len());
        tally(
            self.name(),
            capacity,
            refs.iter()
                .zip(next)
                .map(|(&page, next_use)| frames.access(page, next_use)),
        )
    }
}

/// `next[i]` is the index of the next reference to `pages[i]` after `i`,
/// or `pages.len()` if there is none.
fn next_occurrences(pages: &[PageId]) -> Vec<usize> {
    let n = pages.len();
    let mut next = vec![n; n];
    let mut seen: HashMap<PageId, usize> = HashMap::new();

    for (i, &page) in pages.iter().enumerate().rev() {
        if let Some(later) = seen.insert(page, i) {
            next[i] = later;
        }
    }
    next
}

/// Resident set for one OPT run.
struct OptFrames {
    slots: Vec<PageId>,

    /// Next use of the page in the same slot.
    next_use: Vec<usize>,

    lookup: HashMap<PageId, usize>,
    capacity: usize,
}

impl OptFrames {
    fn new(capacity: Capacity, references: usize) -> Self {
        let reserve = capacity.get().min(references);
        Self {
            slots: Vec::with_capacity(reserve),
            next_use: Vec::with_capacity(reserve),
            lookup: HashMap::with_capacity(reserve),
            capacity: capacity.get(),
        }
    }

    /// Reference `page`, whose following use is at `next_use`.
    fn access(&mut self, page: PageId, next_use: usize) -> Access {
        if let Some(&slot) = self.lookup.get(&page) {
            self.next_use[slot] = next_use;
            return Access::Hit;
        }

        if self.slots.len() < self.capacity {
            self.lookup.insert(page, self.slots.len());
            self.slots.push(page);
            self.next_use.push(next_use);
            return Access::Miss { evicted: None };
        }

        let victim = self.victim();
        let old = std::mem::replace(&mut self.slots[victim], page);
        self.next_use[victim] = next_use;
        self.lookup.remove(&old);
        self.lookup.insert(page, victim);
        Access::Miss { evicted: Some(old) }
    }

    /// First slot holding the farthest next use.
    fn victim(&self) -> usize {
        let mut victim = 0;
        for (slot, &next_use) in self.next_use.iter().enumerate().skip(1) {
            if next_use > self.next_use[victim] {
                victim = slot;
            }
        }
        victim
    }
}
