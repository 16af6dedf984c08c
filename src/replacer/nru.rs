//! NRU (Not Recently Used) replacement policy, single reference bit.
//!
//! Instead of clearing reference bits on a periodic timer, this variant
//! starts a new epoch on every eviction: all bits are cleared except the one
//! belonging to the page just installed.
//!
//! When every resident page has its bit set there is no "not recently used"
//! candidate and slot 0 is evicted. That fixed-slot fallback is intentional
//! and keeps results comparable with the classic figures for this workload.

use std::collections::HashMap;

use crate::common::{Capacity, PageId};
use crate::replacer::{tally, Access, ReplacementEngine, RunStats};
use crate::workload::ReferenceString;

/// Evicts the first slot whose reference bit is clear, falling back to slot 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NruEngine;

impl ReplacementEngine for NruEngine {
    fn name(&self) -> &'static str {
        "NRU"
    }

    fn run(&self, refs: &ReferenceString, capacity: Capacity) -> RunStats {
        let mut frames = NruFrames::new(capacity, refs.len());
        tally(self.name(), capacity, refs.iter().map(|&page| frames.access(page)))
    }
}

/// Resident set for one NRU run. Slot order is significant.
struct NruFrames {
    slots: Vec<PageId>,
    referenced: Vec<bool>,
    lookup: HashMap<PageId, usize>,
    capacity: usize,
}

impl NruFrames {
    fn new(capacity: Capacity, references: usize) -> Self {
        let reserve = capacity.get().min(references);
        Self {
            slots: Vec::with_capacity(reserve),
            referenced: Vec::with_capacity(reserve),
            lookup: HashMap::with_capacity(reserve),
            capacity: capacity.get(),
        }
    }

    fn access(&mut self, page: PageId) -> Access {
        if let Some(&slot) = self.lookup.get(&page) {
            self.referenced[slot] = true;
            return Access::Hit;
        }

        if self.slots.len() < self.capacity {
            self.lookup.insert(page, self.slots.len());
            self.slots.push(page);
            self.referenced.push(true);
            return Access::Miss { evicted: None };
        }

        let victim = self.referenced.iter().position(|&r| !r).unwrap_or(0);
        let old = std::mem::replace(&mut self.slots[victim], page);
        self.lookup.remove(&old);
        self.lookup.insert(page, victim);

        // New epoch
        self.referenced.fill(false);
        self.referenced[victim] = true;

        Access::Miss { evicted: Some(old) }
    }
}
