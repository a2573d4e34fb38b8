//! `tl-core` — foundational types for the `rust_tl` traffic light toolkit.
//!
//! This crate is a dependency of every other `tl-*` crate.  It intentionally
//! has no `tl-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`phase`]   | `Phase` — the red/green light state                 |
//! | [`timing`]  | `CycleTiming`, `UniformTiming`, `FixedTiming`       |
//! | [`config`]  | `LightConfig`                                       |
//! | [`error`]   | `TlError`, `TlResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod phase;
pub mod timing;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LightConfig;
pub use error::{TlError, TlResult};
pub use phase::Phase;
pub use timing::{CycleTiming, FixedTiming, UniformTiming};
