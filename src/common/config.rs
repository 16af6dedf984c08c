//! Configuration constants for pagesim.
//!
//! These reproduce the classic textbook workload: 320 instructions, 10
//! instructions per page (so 32 distinct pages), swept over 4..=32 frames.

/// Number of instruction addresses in the generated workload.
pub const DEFAULT_INSTRUCTION_COUNT: u32 = 320;

/// Instructions that fit in one page.
///
/// # Mapping
/// page = address / DEFAULT_INSTRUCTIONS_PER_PAGE, so the default workload
/// touches at most 32 pages.
pub const DEFAULT_INSTRUCTIONS_PER_PAGE: u32 = 10;

/// Smallest frame pool in the default sweep.
pub const DEFAULT_MIN_FRAMES: usize = 4;

/// Largest frame pool in the default sweep.
pub const DEFAULT_MAX_FRAMES: usize = 32;

/// Upper bound on `max_frames`; one sweep row is kept per capacity.
pub const MAX_SWEEP_FRAMES: usize = 1 << 16;

/// Probability that the next instruction is the sequential successor.
pub const DEFAULT_SEQUENTIAL_PROBABILITY: f64 = 0.50;

/// Probability of jumping somewhere at or below the current address.
///
/// The remaining probability mass (0.25 by default) jumps above it.
pub const DEFAULT_LOWER_JUMP_PROBABILITY: f64 = 0.25;

/// Seed used when none is given explicitly.
pub const DEFAULT_SEED: u64 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workload_fits_max_frames() {
        let pages = DEFAULT_INSTRUCTION_COUNT.div_ceil(DEFAULT_INSTRUCTIONS_PER_PAGE);
        assert_eq!(pages as usize, DEFAULT_MAX_FRAMES);
    }

    #[test]
    fn test_default_probabilities_leave_upper_jump_mass() {
        let upper = 1.0 - DEFAULT_SEQUENTIAL_PROBABILITY - DEFAULT_LOWER_JUMP_PROBABILITY;
        assert!((upper - 0.25).abs() < f64::EPSILON);
    }
}
