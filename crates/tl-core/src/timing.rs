//! Cycle duration sources.
//!
//! # Design
//!
//! The cycle routine asks a [`CycleTiming`] for the length of each phase
//! before it starts timing it, and redraws after every transition — each red
//! or green period gets its own independent duration.  Keeping the draw
//! behind a trait means production code gets an entropy-seeded uniform draw
//! while tests substitute a fixed value and assert hard timing bounds.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the next cycle duration.
///
/// Implementations are moved into the cycle thread, hence the `Send` bound.
pub trait CycleTiming: Send {
    /// How long the upcoming phase should last.
    fn next_cycle(&mut self) -> Duration;
}

// ── UniformTiming ─────────────────────────────────────────────────────────────

/// Uniform random duration in `[min_ms, max_ms]` milliseconds.
///
/// The generator is a non-cryptographic `SmallRng`; unpredictability across
/// runs is all that is required of it.
pub struct UniformTiming {
    rng:    SmallRng,
    min_ms: u64,
    max_ms: u64,
}

impl UniformTiming {
    /// Entropy-seeded source — the production default.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self::with_rng(SmallRng::from_entropy(), min_ms, max_ms)
    }

    /// Deterministically seeded source.  The same seed always yields the
    /// same duration sequence.
    pub fn seeded(seed: u64, min_ms: u64, max_ms: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), min_ms, max_ms)
    }

    fn with_rng(rng: SmallRng, min_ms: u64, max_ms: u64) -> Self {
        // Degenerate ranges collapse to a constant min_ms.
        Self { rng, min_ms, max_ms: max_ms.max(min_ms) }
    }
}

impl CycleTiming for UniformTiming {
    fn next_cycle(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_ms..=self.max_ms))
    }
}

// ── FixedTiming ───────────────────────────────────────────────────────────────

/// Constant duration — deterministic runs and timing-bound tests.
#[derive(Copy, Clone, Debug)]
pub struct FixedTiming(pub Duration);

impl FixedTiming {
    /// Convenience constructor from milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        FixedTiming(Duration::from_millis(ms))
    }
}

impl CycleTiming for FixedTiming {
    fn next_cycle(&mut self) -> Duration {
        self.0
    }
}
