//! Observer trait for cycle-thread reporting.

use std::time::Duration;

use tl_core::Phase;

/// Callbacks invoked by the cycle thread at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The observer is moved into the cycle
/// thread, so implementations must be `Send`.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl LightObserver for TransitionPrinter {
///     fn on_transition(&mut self, phase: Phase, held: Duration) {
///         println!("now {phase}, previous phase held {} ms", held.as_millis());
///     }
/// }
/// ```
pub trait LightObserver: Send {
    /// Called once when the cycle thread starts, before the first transition.
    fn on_start(&mut self, _initial: Phase) {}

    /// Called immediately after each phase flip.
    ///
    /// `held` is how long the previous phase lasted.
    fn on_transition(&mut self, _phase: Phase, _held: Duration) {}

    /// Called once as the cycle thread exits.
    fn on_stop(&mut self, _final_phase: Phase) {}
}

/// A [`LightObserver`] that does nothing.  Use when you need a light but
/// don't want cycle callbacks.
pub struct NoopObserver;

impl LightObserver for NoopObserver {}
