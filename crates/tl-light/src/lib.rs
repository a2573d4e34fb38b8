//! `tl-light` — the traffic light actor for the `rust_tl` toolkit.
//!
//! # How it works
//!
//! ```text
//! simulate() ──spawns──▶ cycle thread:
//!   loop: sleep poll_interval
//!         stop flag set?            → exit
//!         elapsed ≥ target duration → toggle phase, notify observer,
//!                                     send phase into LatestQueue,
//!                                     redraw target duration
//!
//! wait_for_green() ──▶ loop: LatestQueue::recv() until Green arrives
//! current_phase()  ──▶ lock-protected read, never blocks on the cycle
//! shutdown()       ──▶ set stop flag, close queue, join cycle thread
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tl_light::TrafficLight;
//!
//! let light = Arc::new(TrafficLight::new());
//! light.simulate()?;
//!
//! let l = Arc::clone(&light);
//! std::thread::spawn(move || {
//!     l.wait_for_green().unwrap();
//!     // cross the intersection
//! });
//! ```

pub mod builder;
pub mod error;
pub mod light;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::LightBuilder;
pub use error::{LightError, LightResult};
pub use light::TrafficLight;
pub use observer::{LightObserver, NoopObserver};
