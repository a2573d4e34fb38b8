//! The `TrafficLight` actor and its cycle thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tl_core::{CycleTiming, LightConfig, Phase};
use tl_sync::LatestQueue;

use crate::observer::{LightObserver, NoopObserver};
use crate::{LightError, LightResult};

// ── Shared state ──────────────────────────────────────────────────────────────

/// State shared between the cycle thread and the actor's public methods.
struct Shared {
    /// Current phase.  Written only by the cycle thread; lock-protected so
    /// readers on any thread get a consistent snapshot.
    phase: Mutex<Phase>,
    /// Transition handoff to blocked waiters.
    queue: LatestQueue<Phase>,
    /// Shutdown request, checked once per poll iteration.
    stop:  AtomicBool,
}

/// Cycle-thread lifecycle.  The timing source and observer are parked here
/// until `simulate` moves them into the thread.
enum Cycle {
    Idle {
        timing:   Box<dyn CycleTiming>,
        observer: Box<dyn LightObserver>,
    },
    Running(JoinHandle<()>),
    Stopped,
}

// ── TrafficLight ──────────────────────────────────────────────────────────────

/// A two-phase traffic light driven by a background cycle thread.
///
/// The light starts red.  Once [`simulate`][Self::simulate] is called, a
/// background thread toggles the phase on a randomized interval and
/// publishes each new phase through an internal latest-value queue.  Any
/// number of threads may block in [`wait_for_green`][Self::wait_for_green]
/// concurrently — every public method takes `&self`, so the light is shared
/// via `Arc`.
///
/// Construct with [`TrafficLight::new`] for the defaults (4–6 s cycles,
/// entropy-seeded) or with [`LightBuilder`][crate::LightBuilder] to inject
/// configuration, a timing source, or an observer.
pub struct TrafficLight {
    shared: Arc<Shared>,
    cycle:  Mutex<Cycle>,
    poll:   Duration,
}

impl TrafficLight {
    /// A light with default configuration: 4–6 s cycles, entropy-seeded
    /// timing, 1 ms poll, no observer.
    pub fn new() -> Self {
        let config = LightConfig::default();
        Self::assemble(
            Box::new(config.make_timing()),
            Box::new(NoopObserver),
            config.poll_interval(),
        )
    }

    pub(crate) fn assemble(
        timing:   Box<dyn CycleTiming>,
        observer: Box<dyn LightObserver>,
        poll:     Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                phase: Mutex::new(Phase::Red),
                queue: LatestQueue::new(),
                stop:  AtomicBool::new(false),
            }),
            cycle: Mutex::new(Cycle::Idle { timing, observer }),
            poll,
        }
    }

    /// Start the background cycle thread.  Call once.
    ///
    /// A second call fails with [`LightError::AlreadyRunning`]; a call after
    /// [`shutdown`][Self::shutdown] fails with [`LightError::Stopped`].  If
    /// the thread cannot be spawned the error propagates and the light is
    /// left stopped.
    pub fn simulate(&self) -> LightResult<()> {
        let mut cycle = self
            .cycle
            .lock()
            .map_err(|_| LightError::Poisoned("cycle state"))?;

        match std::mem::replace(&mut *cycle, Cycle::Stopped) {
            Cycle::Idle { timing, observer } => {
                let shared = Arc::clone(&self.shared);
                let poll = self.poll;
                let handle = thread::Builder::new()
                    .name("tl-cycle".into())
                    .spawn(move || run_cycle(&shared, timing, observer, poll))?;
                *cycle = Cycle::Running(handle);
                Ok(())
            }
            running @ Cycle::Running(_) => {
                *cycle = running;
                Err(LightError::AlreadyRunning)
            }
            Cycle::Stopped => Err(LightError::Stopped),
        }
    }

    /// The phase right now.
    ///
    /// Never blocks beyond the internal lock, and is valid before
    /// [`simulate`][Self::simulate] (a light starts red).
    pub fn current_phase(&self) -> LightResult<Phase> {
        self.shared
            .phase
            .lock()
            .map(|p| *p)
            .map_err(|_| LightError::Poisoned("phase"))
    }

    /// Block until `target` is published by the cycle thread.
    ///
    /// Intervening transitions to other phases are consumed and discarded.
    /// Each published phase is delivered to at most one waiter: with several
    /// threads blocked on the same target, a single transition releases one
    /// of them and the rest keep waiting for the next.
    ///
    /// Fails with [`LightError::Stopped`] if the light is shut down while
    /// waiting.
    pub fn wait_for(&self, target: Phase) -> LightResult<()> {
        loop {
            if self.shared.queue.recv()? == target {
                return Ok(());
            }
        }
    }

    /// Block until the next transition to green.
    ///
    /// Delivery is transition-based: a call made while the light is already
    /// green waits for the *next* red→green flip — one full red phase away —
    /// rather than returning immediately.
    pub fn wait_for_green(&self) -> LightResult<()> {
        self.wait_for(Phase::Green)
    }

    /// Stop the cycle thread and wake every blocked waiter with
    /// [`LightError::Stopped`].
    ///
    /// Returns after the cycle thread has exited; idempotent.  A cycle
    /// thread that panicked surfaces as [`LightError::CyclePanicked`].
    pub fn shutdown(&self) -> LightResult<()> {
        self.shared.stop.store(true, Ordering::Release);
        self.shared.queue.close();

        let mut cycle = self
            .cycle
            .lock()
            .map_err(|_| LightError::Poisoned("cycle state"))?;
        match std::mem::replace(&mut *cycle, Cycle::Stopped) {
            Cycle::Running(handle) => handle.join().map_err(|_| LightError::CyclePanicked),
            Cycle::Idle { .. } | Cycle::Stopped => Ok(()),
        }
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TrafficLight {
    /// Best-effort shutdown so the cycle thread never outlives the actor.
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Release);
        self.shared.queue.close();
        let mut cycle = self
            .cycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Cycle::Running(handle) = std::mem::replace(&mut *cycle, Cycle::Stopped) {
            let _ = handle.join();
        }
    }
}

// ── Cycle routine ─────────────────────────────────────────────────────────────

/// Body of the cycle thread: poll-sleep, toggle when the current target
/// duration elapses, publish, redraw.
fn run_cycle(
    shared:       &Shared,
    mut timing:   Box<dyn CycleTiming>,
    mut observer: Box<dyn LightObserver>,
    poll:         Duration,
) {
    observer.on_start(read_phase(shared));

    let mut target = timing.next_cycle();
    let mut armed = Instant::now();

    loop {
        thread::sleep(poll);
        if shared.stop.load(Ordering::Acquire) {
            break;
        }

        let held = armed.elapsed();
        if held < target {
            continue;
        }

        let next = match shared.phase.lock() {
            Ok(mut phase) => {
                *phase = phase.toggle();
                *phase
            }
            Err(_) => break, // a reader panicked holding the lock
        };
        observer.on_transition(next, held);
        if shared.queue.send(next).is_err() {
            break; // closed by shutdown
        }

        armed = Instant::now();
        target = timing.next_cycle();
    }

    // Wake any waiters that raced with shutdown.
    shared.queue.close();
    observer.on_stop(read_phase(shared));
}

/// Phase snapshot for observer callbacks.  `Phase` is `Copy`, so the value
/// is readable even from a poisoned lock.
fn read_phase(shared: &Shared) -> Phase {
    *shared.phase.lock().unwrap_or_else(PoisonError::into_inner)
}
