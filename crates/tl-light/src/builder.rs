//! Fluent builder for constructing a [`TrafficLight`].

use tl_core::{CycleTiming, LightConfig};

use crate::observer::{LightObserver, NoopObserver};
use crate::{LightResult, TrafficLight};

/// Fluent builder for [`TrafficLight`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                       |
/// |----------------|-----------------------------------------------|
/// | `.config(c)`   | `LightConfig::default()` (4–6 s, 1 ms poll)   |
/// | `.timing(t)`   | `UniformTiming` derived from the config       |
/// | `.observer(o)` | [`NoopObserver`]                              |
///
/// # Example
///
/// ```rust,ignore
/// let light = LightBuilder::new()
///     .config(LightConfig { seed: Some(42), ..LightConfig::default() })
///     .observer(TransitionPrinter)
///     .build()?;
/// light.simulate()?;
/// ```
pub struct LightBuilder {
    config:   LightConfig,
    timing:   Option<Box<dyn CycleTiming>>,
    observer: Box<dyn LightObserver>,
}

impl LightBuilder {
    pub fn new() -> Self {
        Self {
            config:   LightConfig::default(),
            timing:   None,
            observer: Box::new(NoopObserver),
        }
    }

    /// Cycle bounds, poll interval, and seed.  Validated at
    /// [`build`][Self::build].
    pub fn config(mut self, config: LightConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the config-derived duration source entirely — e.g.
    /// [`FixedTiming`][tl_core::FixedTiming] for deterministic cycles.
    pub fn timing(mut self, timing: impl CycleTiming + 'static) -> Self {
        self.timing = Some(Box::new(timing));
        self
    }

    /// Receive cycle-thread callbacks (start, each transition, stop).
    pub fn observer(mut self, observer: impl LightObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Validate the configuration and assemble a ready-to-start light.
    pub fn build(self) -> LightResult<TrafficLight> {
        let LightBuilder { config, timing, observer } = self;
        config.validate()?;
        let timing = timing.unwrap_or_else(|| Box::new(config.make_timing()));
        Ok(TrafficLight::assemble(timing, observer, config.poll_interval()))
    }
}

impl Default for LightBuilder {
    fn default() -> Self {
        Self::new()
    }
}
