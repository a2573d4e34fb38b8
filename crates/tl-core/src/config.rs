//! Light configuration.

use std::time::Duration;

use crate::error::{TlError, TlResult};
use crate::timing::UniformTiming;

/// Construction-time configuration for a traffic light.
///
/// Typically built as `LightConfig::default()` — a 4–6 s cycle polled every
/// millisecond — and overridden field-by-field with struct-update syntax
/// where needed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightConfig {
    /// Shortest cycle duration in milliseconds (inclusive).  Default: 4000.
    pub min_cycle_ms: u64,

    /// Longest cycle duration in milliseconds (inclusive).  Default: 6000.
    pub max_cycle_ms: u64,

    /// Sleep between elapsed-time checks in the cycle loop.  Bounds CPU
    /// usage and sets the granularity at which shutdown is noticed.
    /// Default: 1.
    pub poll_interval_ms: u64,

    /// Timing seed.  `None` seeds from OS entropy; `Some` makes the duration
    /// sequence reproducible.
    pub seed: Option<u64>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            min_cycle_ms:     4_000,
            max_cycle_ms:     6_000,
            poll_interval_ms: 1,
            seed:             None,
        }
    }
}

impl LightConfig {
    /// Check invariants: non-zero cycle bounds in order, non-zero poll
    /// interval.
    pub fn validate(&self) -> TlResult<()> {
        if self.min_cycle_ms == 0 {
            return Err(TlError::Config("min_cycle_ms must be > 0".into()));
        }
        if self.min_cycle_ms > self.max_cycle_ms {
            return Err(TlError::Config(format!(
                "min_cycle_ms {} exceeds max_cycle_ms {}",
                self.min_cycle_ms, self.max_cycle_ms
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(TlError::Config("poll_interval_ms must be > 0".into()));
        }
        Ok(())
    }

    /// The cycle-loop sleep as a `Duration`.
    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Construct the production duration source for this config.
    pub fn make_timing(&self) -> UniformTiming {
        match self.seed {
            Some(seed) => UniformTiming::seeded(seed, self.min_cycle_ms, self.max_cycle_ms),
            None => UniformTiming::new(self.min_cycle_ms, self.max_cycle_ms),
        }
    }
}
