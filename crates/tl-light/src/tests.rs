//! Integration tests for the traffic light actor.
//!
//! Timing-sensitive assertions use short fixed cycles and generous slack so
//! they stay robust under scheduler jitter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tl_core::{FixedTiming, LightConfig, Phase};

use crate::{LightBuilder, LightError, LightObserver, TrafficLight};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Observer that records every callback for later assertions.
#[derive(Clone, Default)]
struct Recorder {
    transitions: Arc<Mutex<Vec<(Phase, Duration)>>>,
    started:     Arc<AtomicBool>,
    stopped:     Arc<AtomicBool>,
}

impl LightObserver for Recorder {
    fn on_start(&mut self, _initial: Phase) {
        self.started.store(true, Ordering::Release);
    }

    fn on_transition(&mut self, phase: Phase, held: Duration) {
        self.transitions.lock().unwrap().push((phase, held));
    }

    fn on_stop(&mut self, _final_phase: Phase) {
        self.stopped.store(true, Ordering::Release);
    }
}

impl Recorder {
    fn phases(&self) -> Vec<Phase> {
        self.transitions.lock().unwrap().iter().map(|&(p, _)| p).collect()
    }

    fn held_times(&self) -> Vec<Duration> {
        self.transitions.lock().unwrap().iter().map(|&(_, h)| h).collect()
    }
}

/// Light with a fixed cycle duration and a recorder attached.
fn fixed_light(cycle_ms: u64) -> (TrafficLight, Recorder) {
    let recorder = Recorder::default();
    let light = LightBuilder::new()
        .timing(FixedTiming::from_millis(cycle_ms))
        .observer(recorder.clone())
        .build()
        .unwrap();
    (light, recorder)
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn starts_red_before_simulate() {
        let light = TrafficLight::new();
        assert_eq!(light.current_phase().unwrap(), Phase::Red);
    }

    #[test]
    fn double_simulate_rejected() {
        let (light, _) = fixed_light(10_000);
        light.simulate().unwrap();
        assert!(matches!(light.simulate(), Err(LightError::AlreadyRunning)));
        light.shutdown().unwrap();
    }

    #[test]
    fn simulate_after_shutdown_rejected() {
        let (light, _) = fixed_light(10_000);
        light.simulate().unwrap();
        light.shutdown().unwrap();
        assert!(matches!(light.simulate(), Err(LightError::Stopped)));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let (light, _) = fixed_light(10_000);
        light.simulate().unwrap();
        light.shutdown().unwrap();
        light.shutdown().unwrap();
    }

    #[test]
    fn shutdown_before_simulate_is_ok() {
        let (light, _) = fixed_light(10_000);
        light.shutdown().unwrap();
        assert!(matches!(light.simulate(), Err(LightError::Stopped)));
    }

    #[test]
    fn observer_start_and_stop_fire() {
        let (light, recorder) = fixed_light(10_000);
        light.simulate().unwrap();
        thread::sleep(Duration::from_millis(50));
        assert!(recorder.started.load(Ordering::Acquire));
        assert!(!recorder.stopped.load(Ordering::Acquire));
        light.shutdown().unwrap();
        assert!(recorder.stopped.load(Ordering::Acquire));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn default_build_succeeds() {
        let light = LightBuilder::new().build().unwrap();
        assert_eq!(light.current_phase().unwrap(), Phase::Red);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = LightConfig {
            min_cycle_ms: 6_000,
            max_cycle_ms: 4_000,
            ..LightConfig::default()
        };
        let result = LightBuilder::new().config(config).build();
        assert!(matches!(result, Err(LightError::Config(_))));
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let config = LightConfig { poll_interval_ms: 0, ..LightConfig::default() };
        assert!(LightBuilder::new().config(config).build().is_err());
    }
}

// ── Cycling ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cycling {
    use super::*;

    #[test]
    fn phases_strictly_alternate() {
        let (light, recorder) = fixed_light(30);
        light.simulate().unwrap();
        thread::sleep(Duration::from_millis(250));
        light.shutdown().unwrap();

        let phases = recorder.phases();
        assert!(phases.len() >= 2, "expected several transitions, got {phases:?}");
        // Red start means the first published phase is always green.
        assert_eq!(phases[0], Phase::Green);
        for pair in phases.windows(2) {
            assert_eq!(pair[1], pair[0].toggle(), "repeat in {phases:?}");
        }
    }

    #[test]
    fn held_time_meets_target() {
        let (light, recorder) = fixed_light(100);
        light.simulate().unwrap();
        thread::sleep(Duration::from_millis(450));
        light.shutdown().unwrap();

        let held_times = recorder.held_times();
        assert!(held_times.len() >= 2, "expected ≥ 2 transitions, got {held_times:?}");
        for held in held_times {
            assert!(held >= Duration::from_millis(100), "flipped early: {held:?}");
            // Slack for poll granularity and scheduler jitter.
            assert!(held < Duration::from_millis(250), "flipped late: {held:?}");
        }
    }

    #[test]
    fn current_phase_tracks_transitions() {
        let (light, recorder) = fixed_light(60);
        light.simulate().unwrap();
        thread::sleep(Duration::from_millis(200));
        light.shutdown().unwrap();

        let phases = recorder.phases();
        let last = *phases.last().expect("no transitions recorded");
        assert_eq!(light.current_phase().unwrap(), last);
    }
}

// ── Waiting ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting {
    use super::*;

    #[test]
    fn wait_for_green_returns_on_first_transition() {
        let (light, _) = fixed_light(25);
        light.simulate().unwrap();

        let start = Instant::now();
        light.wait_for_green().unwrap();
        // One cycle plus slack, nowhere near a second green (75 ms out).
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(light.current_phase().unwrap(), Phase::Green);
        light.shutdown().unwrap();
    }

    #[test]
    fn already_green_waits_for_next_cycle() {
        let (light, _) = fixed_light(40);
        light.simulate().unwrap();
        light.wait_for_green().unwrap();

        // Phase is green and its send was just consumed: the next green is a
        // full red phase away (red at +40 ms, green at +80 ms).
        let start = Instant::now();
        light.wait_for_green().unwrap();
        assert!(
            start.elapsed() >= Duration::from_millis(60),
            "returned for the already-current green after {:?}",
            start.elapsed()
        );
        light.shutdown().unwrap();
    }

    #[test]
    fn wait_for_red_skips_green() {
        let (light, _) = fixed_light(30);
        light.simulate().unwrap();
        // First published phase is green; the wait consumes and discards it.
        light.wait_for(Phase::Red).unwrap();
        assert_eq!(light.current_phase().unwrap(), Phase::Red);
        light.shutdown().unwrap();
    }
}

// ── Concurrency ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod concurrency {
    use super::*;

    #[test]
    fn single_green_releases_one_waiter() {
        let (light, _) = fixed_light(200);
        let light = Arc::new(light);

        let waiters: Vec<_> = (0..2)
            .map(|_| {
                let light = Arc::clone(&light);
                thread::spawn(move || light.wait_for_green().is_ok())
            })
            .collect();

        // Park both waiters, run exactly one green transition (at +200 ms;
        // the next is at +600 ms), then stop.
        thread::sleep(Duration::from_millis(20));
        light.simulate().unwrap();
        thread::sleep(Duration::from_millis(280));
        light.shutdown().unwrap();

        let released = waiters
            .into_iter()
            .map(|w| w.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(released, 1, "one transition released both waiters");
    }

    #[test]
    fn shutdown_unblocks_waiters() {
        let (light, _) = fixed_light(10_000);
        let light = Arc::new(light);
        light.simulate().unwrap();

        let waiter = {
            let light = Arc::clone(&light);
            thread::spawn(move || light.wait_for_green())
        };

        thread::sleep(Duration::from_millis(50));
        light.shutdown().unwrap();
        assert!(matches!(waiter.join().unwrap(), Err(LightError::Stopped)));
    }

    #[test]
    fn concurrent_readers_see_valid_phases() {
        let (light, _) = fixed_light(5);
        let light = Arc::new(light);
        light.simulate().unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let light = Arc::clone(&light);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let phase = light.current_phase().unwrap();
                        assert!(matches!(phase, Phase::Red | Phase::Green));
                    }
                })
            })
            .collect();

        for r in readers {
            r.join().unwrap();
        }
        light.shutdown().unwrap();
    }
}
