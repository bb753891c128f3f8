//! Deterministic pseudo-random generator
//!
//! A plain linear-congruential generator: the same seed replays the same
//! value sequence forever, which is what the engine relies on for
//! reproducible gameplay variety. The recurrence is the legacy engine's
//! (`seed * 0x343FD + 0x269EC3`), so saved seeds keep producing the values
//! they always did. Low bits of the raw output have short periods; callers
//! needing uniform low-bit randomness must mask or shift. Not suitable for
//! anything security-related.
//!
//! The legacy engine held the seed in a process-wide global; here it is an
//! explicit [`Lcg`] value, so independent consumers draw from independent
//! sequences.

use crate::{LCG_ADD, LCG_MUL, RAND_RANGE_MAX};

/// How a bounded draw resolved.
///
/// The legacy generator corrected or degraded bad inputs in place and only
/// logged a warning; naming the outcomes lets callers and tests assert on
/// the behavior directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomOutcome {
    /// Bounds were valid; the value is a modulo-reduced draw.
    InRange,
    /// `max < min`; the bounds were swapped and the draw proceeded.
    SwappedBounds,
    /// The range exceeds [`RAND_RANGE_MAX`]; the sentinel `0` was returned.
    RangeTooWide,
}

/// Deterministic linear-congruential generator.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcg {
    /// A generator seeded with 0, matching the legacy process-start state.
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// A generator starting from the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Set the seed directly. No validation; any value is a valid seed.
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
    }

    /// Advance the recurrence and return the new 32-bit state.
    pub fn next_raw(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        self.seed
    }

    /// Draw a value in `[min, max]` inclusive.
    ///
    /// Inverted bounds are swapped with a warning. A range at or above
    /// [`RAND_RANGE_MAX`] yields the sentinel `0` with a warning. The
    /// modulo reduction is biased toward lower values over large ranges,
    /// which is accepted for gameplay variety. Use
    /// [`random_with_outcome`](Self::random_with_outcome) to observe which
    /// case applied.
    pub fn random(&mut self, min: i32, max: i32) -> i32 {
        self.random_with_outcome(min, max).0
    }

    /// [`random`](Self::random), also reporting how the draw resolved.
    pub fn random_with_outcome(&mut self, mut min: i32, mut max: i32) -> (i32, RandomOutcome) {
        let mut outcome = RandomOutcome::InRange;
        if max < min {
            tracing::warn!(min, max, "random: inverted bounds, swapping");
            std::mem::swap(&mut min, &mut max);
            outcome = RandomOutcome::SwappedBounds;
        }

        let range = i64::from(max) - i64::from(min);
        if range >= i64::from(RAND_RANGE_MAX) {
            tracing::warn!(min, max, "random: range exceeds generator limit");
            return (0, RandomOutcome::RangeTooWide);
        }

        let span = (range + 1) as u32;
        (min + (self.next_raw() % span) as i32, outcome)
    }
}

// =============================================================================
// Tests
// =============================================================================
