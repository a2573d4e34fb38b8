//! crossing — smallest demo for the rust_tl traffic light toolkit.
//!
//! One intersection light cycles on a short reproducible schedule while a
//! handful of vehicle threads queue up and cross whenever green is
//! published.  Production cycle lengths are 4–6 s; the demo shortens them so
//! a run shows several transitions in a few seconds.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use tl_core::{LightConfig, Phase};
use tl_light::{LightBuilder, LightObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT: usize = 4;
const SEED:          u64   = 42;
const MIN_CYCLE_MS:  u64   = 1_000;
const MAX_CYCLE_MS:  u64   = 2_000;
const RUN_FOR:       Duration = Duration::from_secs(8);

// ── Observer ──────────────────────────────────────────────────────────────────

struct TransitionPrinter {
    started: Instant,
}

impl LightObserver for TransitionPrinter {
    fn on_transition(&mut self, phase: Phase, held: Duration) {
        println!(
            "[{:>5} ms] light is now {phase} (previous phase held {} ms)",
            self.started.elapsed().as_millis(),
            held.as_millis()
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== crossing — rust_tl traffic light ===");
    println!("Vehicles: {VEHICLE_COUNT}  |  Cycle: {MIN_CYCLE_MS}–{MAX_CYCLE_MS} ms  |  Seed: {SEED}");
    println!();

    // 1. Build the light with a short, reproducible cycle.
    let config = LightConfig {
        min_cycle_ms: MIN_CYCLE_MS,
        max_cycle_ms: MAX_CYCLE_MS,
        seed:         Some(SEED),
        ..LightConfig::default()
    };
    let light = Arc::new(
        LightBuilder::new()
            .config(config)
            .observer(TransitionPrinter { started: Instant::now() })
            .build()?,
    );

    // 2. Start the cycle thread.
    light.simulate()?;

    // 3. Vehicles line up and cross at each green.
    let mut drivers = Vec::with_capacity(VEHICLE_COUNT);
    for id in 0..VEHICLE_COUNT {
        let light = Arc::clone(&light);
        drivers.push(thread::spawn(move || {
            let mut crossings = 0usize;
            while light.wait_for_green().is_ok() {
                crossings += 1;
                println!("    vehicle {id} crossed (crossing #{crossings})");
            }
            crossings
        }));
    }

    // 4. Let the intersection run, then shut down.
    thread::sleep(RUN_FOR);
    light.shutdown()?;

    // 5. Summary.
    println!();
    for (id, driver) in drivers.into_iter().enumerate() {
        let crossings = driver.join().expect("driver thread panicked");
        println!("vehicle {id}: {crossings} crossings");
    }
    println!("final phase: {}", light.current_phase()?);

    Ok(())
}
