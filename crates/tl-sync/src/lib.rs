//! `tl-sync` — the latest-value handoff primitive for the `rust_tl` toolkit.
//!
//! A single type lives here: [`LatestQueue`], a thread-safe single-slot
//! queue where senders overwrite and receivers block.  It is generic and has
//! no `tl-*` dependencies so it can be reused for any latest-value handoff.

pub mod error;
pub mod latest_queue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{QueueError, QueueResult};
pub use latest_queue::LatestQueue;
