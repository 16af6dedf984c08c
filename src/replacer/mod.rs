//! Page replacement engines.
//!
//! Every engine implements [`ReplacementEngine`]: given a reference string
//! and a frame capacity it replays the string and counts page faults. Runs
//! own all of their bookkeeping, so engines are freely shareable across
//! threads and any two runs are independent.
//!
//! Currently implements:
//! - [`FifoEngine`] - evicts the oldest admitted page
//! - [`LruEngine`] - evicts the least recently referenced page
//! - [`OptEngine`] - Belady's optimal policy (evicts the page used farthest in the future)
//! - [`NruEngine`] - single reference bit, cleared after every eviction

mod fifo;
mod lru;
mod nru;
mod opt;
mod stats;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::common::{Capacity, Error, PageId};
use crate::workload::ReferenceString;

pub use fifo::FifoEngine;
pub use lru::LruEngine;
pub use nru::NruEngine;
pub use opt::OptEngine;
pub use stats::RunStats;

/// The contract shared by all replacement policies.
///
/// # Example
/// ```
/// use pagesim::{Capacity, LruEngine, ReferenceString, ReplacementEngine};
///
/// let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let faults = LruEngine.simulate(&refs, Capacity::new(4).unwrap());
/// assert_eq!(faults, 8);
/// ```
pub trait ReplacementEngine: Send + Sync {
    /// Short display name, e.g. `"LRU"`.
    fn name(&self) -> &'static str;

    /// Replay `refs` against a pool of `capacity` frames.
    fn run(&self, refs: &ReferenceString, capacity: Capacity) -> RunStats;

    /// Number of page faults, `0 ..= refs.len()`.
    fn simulate(&self, refs: &ReferenceString, capacity: Capacity) -> usize {
        self.run(refs, capacity).faults
    }
}

/// What a single reference did to the resident set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Hit,
    Miss { evicted: Option<PageId> },
}

/// Fold a run's accesses into [`RunStats`].
pub(crate) fn tally<I>(policy: &'static str, capacity: Capacity, accesses: I) -> RunStats
where
    I: IntoIterator<Item = Access>,
{
    let mut stats = RunStats::default();
    for access in accesses {
        stats.references += 1;
        if let Access::Miss { evicted } = access {
            stats.faults += 1;
            if let Some(victim) = evicted {
                stats.evictions += 1;
                trace!(policy, reference = stats.references, %victim, "evicted");
            }
        }
    }
    debug!(
        policy,
        capacity = capacity.get(),
        references = stats.references,
        faults = stats.faults,
        evictions = stats.evictions,
        "run complete"
    );
    stats
}

/// The built-in policies, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fifo,
    Lru,
    Opt,
    Nru,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Opt, Policy::Nru];

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Opt => "OPT",
            Policy::Nru => "NRU",
        }
    }

    /// A fresh engine implementing this policy.
    pub fn engine(self) -> Box<dyn ReplacementEngine> {
        match self {
            Policy::Fifo => Box::new(FifoEngine),
            Policy::Lru => Box::new(LruEngine),
            Policy::Opt => Box::new(OptEngine),
            Policy::Nru => Box::new(NruEngine),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
