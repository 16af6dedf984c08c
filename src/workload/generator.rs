//! Seeded instruction-address generator.
//!
//! Produces the biased random walk used as the default workload: mostly
//! sequential execution, with jumps into the lower and upper parts of the
//! address space.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{DEFAULT_LOWER_JUMP_PROBABILITY, DEFAULT_SEQUENTIAL_PROBABILITY};
use crate::common::{Error, Result};

/// Branch probabilities of the address walk.
///
/// The upper-jump probability is whatever is left: `1 - sequential - lower_jump`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkProbabilities {
    /// Next address is `prev + 1` (wrapping).
    pub sequential: f64,

    /// Next address is uniform in `[0, prev]`.
    pub lower_jump: f64,
}

impl WalkProbabilities {
    /// # Errors
    /// - `Error::InvalidProbabilities` unless both values are in [0, 1] and
    ///   their sum is at most 1
    pub fn new(sequential: f64, lower_jump: f64) -> Result<Self> {
        let probs = Self {
            sequential,
            lower_jump,
        };
        probs.validate()?;
        Ok(probs)
    }

    pub fn upper_jump(&self) -> f64 {
        1.0 - self.sequential - self.lower_jump
    }

    pub fn validate(&self) -> Result<()> {
        let in_unit = |p: f64| (0.0..=1.0).contains(&p);
        if in_unit(self.sequential)
            && in_unit(self.lower_jump)
            && self.sequential + self.lower_jump <= 1.0
        {
            Ok(())
        } else {
            Err(Error::InvalidProbabilities {
                sequential: self.sequential,
                lower_jump: self.lower_jump,
            })
        }
    }
}

impl Default for WalkProbabilities {
    fn default() -> Self {
        Self {
            sequential: DEFAULT_SEQUENTIAL_PROBABILITY,
            lower_jump: DEFAULT_LOWER_JUMP_PROBABILITY,
        }
    }
}

/// Deterministic address stream over `[0, instruction_count)`.
///
/// The same seed always yields the same stream. The iterator never ends;
/// use [`generate`](Self::generate) for the usual fixed-length workload.
///
/// # Example
/// ```
/// use pagesim::workload::{AddressGenerator, WalkProbabilities};
///
/// let a = AddressGenerator::new(320, WalkProbabilities::default(), 7).unwrap().generate();
/// let b = AddressGenerator::new(320, WalkProbabilities::default(), 7).unwrap().generate();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|&addr| addr < 320));
/// ```
#[derive(Debug)]
pub struct AddressGenerator {
    instruction_count: u32,
    probabilities: WalkProbabilities,
    rng: StdRng,
    prev: Option<u32>,
}

impl AddressGenerator {
    /// # Errors
    /// - `Error::EmptyAddressSpace` if `instruction_count` is 0
    /// - `Error::InvalidProbabilities` if `probabilities` do not validate
    pub fn new(
        instruction_count: u32,
        probabilities: WalkProbabilities,
        seed: u64,
    ) -> Result<Self> {
        if instruction_count == 0 {
            return Err(Error::EmptyAddressSpace);
        }
        probabilities.validate()?;

        Ok(Self {
            instruction_count,
            probabilities,
            rng: StdRng::seed_from_u64(seed),
            prev: None,
        })
    }

    /// Produce `instruction_count` addresses.
    pub fn generate(self) -> Vec<u32> {
        let n = self.instruction_count as usize;
        self.take(n).collect()
    }

    fn step(&mut self, prev: u32) -> u32 {
        let n = self.instruction_count;
        let p: f64 = self.rng.gen();

        if p < self.probabilities.sequential {
            (prev + 1) % n
        } else if p < self.probabilities.sequential + self.probabilities.lower_jump {
            self.rng.gen_range(0..=prev)
        } else {
            // Near the top there is no upper region left, so jump anywhere.
            match prev.checked_add(2).filter(|&lo| lo < n) {
                Some(lo) => self.rng.gen_range(lo..n),
                None => self.rng.gen_range(0..n),
            }
        }
    }
}

impl Iterator for AddressGenerator {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let addr = match self.prev {
            None => self.rng.gen_range(0..self.instruction_count),
            Some(prev) => self.step(prev),
        };
        self.prev = Some(addr);
        Some(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = AddressGenerator::new(320, WalkProbabilities::default(), 42)
            .unwrap()
            .generate();
        let b = AddressGenerator::new(320, WalkProbabilities::default(), 42)
            .unwrap()
            .generate();
        assert_eq!(a.len(), 320);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = AddressGenerator::new(320, WalkProbabilities::default(), 1)
            .unwrap()
            .generate();
        let b = AddressGenerator::new(320, WalkProbabilities::default(), 2)
            .unwrap()
            .generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_addresses_in_range() {
        let addrs = AddressGenerator::new(17, WalkProbabilities::default(), 3)
            .unwrap()
            .take(5_000)
            .collect::<Vec<_>>();
        assert!(addrs.iter().all(|&a| a < 17));
    }

    #[test]
    fn test_purely_sequential_walk_wraps() {
        let probs = WalkProbabilities::new(1.0, 0.0).unwrap();
        let addrs = AddressGenerator::new(5, probs, 9).unwrap().take(12).collect::<Vec<_>>();
        for pair in addrs.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 5);
        }
    }

    #[test]
    fn test_lower_jumps_never_go_up() {
        let probs = WalkProbabilities::new(0.0, 1.0).unwrap();
        let addrs = AddressGenerator::new(1000, probs, 5).unwrap().take(200).collect::<Vec<_>>();
        for pair in addrs.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_upper_jumps_skip_successor() {
        let probs = WalkProbabilities::new(0.0, 0.0).unwrap();
        let addrs = AddressGenerator::new(1000, probs, 5).unwrap().take(200).collect::<Vec<_>>();
        for pair in addrs.windows(2) {
            if pair[0] + 2 < 1000 {
                assert!(pair[1] >= pair[0] + 2);
            }
        }
    }

    #[test]
    fn test_single_instruction_space() {
        let addrs = AddressGenerator::new(1, WalkProbabilities::default(), 0)
            .unwrap()
            .generate();
        assert_eq!(addrs, vec![0]);
    }

    #[test]
    fn test_rejects_empty_space() {
        assert!(matches!(
            AddressGenerator::new(0, WalkProbabilities::default(), 0),
            Err(Error::EmptyAddressSpace)
        ));
    }

    #[test]
    fn test_probability_validation() {
        assert!(WalkProbabilities::new(0.5, 0.25).is_ok());
        assert!(WalkProbabilities::new(0.8, 0.3).is_err());
        assert!(WalkProbabilities::new(-0.1, 0.3).is_err());
        assert!(WalkProbabilities::new(f64::NAN, 0.3).is_err());
        assert_eq!(WalkProbabilities::default().upper_jump(), 0.25);
    }
}
