//! LRU (Least Recently Used) replacement policy.
//!
//! The recency list is a doubly-linked list threaded through a `Vec` of
//! nodes, with a page → node map beside it, so every reference is O(1).

use std::collections::HashMap;

use crate::common::{Capacity, PageId};
use crate::replacer::{tally, Access, ReplacementEngine, RunStats};
use crate::workload::ReferenceString;

/// Evicts the page whose last reference is oldest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruEngine;

impl ReplacementEngine for LruEngine {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn run(&self, refs: &ReferenceString, capacity: Capacity) -> RunStats {
        let mut frames = LruFrames::new(capacity, refs.len());
        tally(self.name(), capacity, refs.iter().map(|&page| frames.access(page)))
    }
}

struct Node {
    page: PageId,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Resident set for one LRU run.
///
/// # Invariants
/// - `head` is the most recently used page, `tail` the least
/// - `lookup` keys are exactly the resident pages
/// - `nodes.len() <= capacity`; a victim's node is reused for the new page
struct LruFrames {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    lookup: HashMap<PageId, usize>,
    capacity: usize,
}

impl LruFrames {
    /// Never reserves more than `references` slots, however large the pool.
    fn new(capacity: Capacity, references: usize) -> Self {
        let reserve = capacity.get().min(references);
        Self {
            nodes: Vec::with_capacity(reserve),
            head: None,
            tail: None,
            lookup: HashMap::with_capacity(reserve),
            capacity: capacity.get(),
        }
    }

    fn access(&mut self, page: PageId) -> Access {
        if let Some(&idx) = self.lookup.get(&page) {
            self.unlink(idx);
            self.push_front(idx);
            return Access::Hit;
        }

        let (idx, evicted) = match self.tail {
            Some(victim) if self.nodes.len() == self.capacity => {
                self.unlink(victim);
                let old = std::mem::replace(&mut self.nodes[victim].page, page);
                self.lookup.remove(&old);
                (victim, Some(old))
            }
            _ => {
                self.nodes.push(Node {
                    page,
                    prev: None,
                    next: None,
                });
                (self.nodes.len() - 1, None)
            }
        };

        self.push_front(idx);
        self.lookup.insert(page, idx);
        Access::Miss { evicted }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].next = self.head;
        self.nodes[idx].prev = None;
        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Resident pages, most recently used first.
    #[cfg(test)]
    fn recency_order(&self) -> Vec<PageId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            out.push(self.nodes[idx].page);
            cursor = self.nodes[idx].next;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(capacity: usize) -> LruFrames {
        LruFrames::new(Capacity::new(capacity).unwrap(), 32)
    }

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_lru_hit_moves_to_front() {
        let mut f = frames(3);
        f.access(PageId::new(1));
        f.access(PageId::new(2));
        f.access(PageId::new(3));
        assert_eq!(f.recency_order(), pages(&[3, 2, 1]));

        assert_eq!(f.access(PageId::new(1)), Access::Hit);
        assert_eq!(f.recency_order(), pages(&[1, 3, 2]));

        // Middle of the list
        assert_eq!(f.access(PageId::new(3)), Access::Hit);
        assert_eq!(f.recency_order(), pages(&[3, 1, 2]));
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut f = frames(3);
        for p in [1, 2, 3, 1] {
            f.access(PageId::new(p));
        }

        // 2 is now least recently used, even though 1 arrived first
        assert_eq!(
            f.access(PageId::new(4)),
            Access::Miss {
                evicted: Some(PageId::new(2))
            }
        );
        assert_eq!(f.recency_order(), pages(&[4, 1, 3]));
    }

    #[test]
    fn test_lru_single_frame() {
        let mut f = frames(1);
        f.access(PageId::new(1));
        assert_eq!(f.access(PageId::new(1)), Access::Hit);
        assert_eq!(
            f.access(PageId::new(2)),
            Access::Miss {
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(f.recency_order(), pages(&[2]));
    }

    #[test]
    fn test_lru_lookup_matches_list() {
        let mut f = frames(4);
        for p in [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1] {
            f.access(PageId::new(p));
            let order = f.recency_order();
            assert!(order.len() <= 4);
            assert_eq!(order.len(), f.lookup.len());
            assert!(order.iter().all(|p| f.lookup.contains_key(p)));
            assert_eq!(order[0], PageId::new(p));
        }
    }

    #[test]
    fn test_lru_beats_fifo_on_reuse() {
        let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        assert_eq!(LruEngine.simulate(&refs, Capacity::new(4).unwrap()), 8);
    }
}
