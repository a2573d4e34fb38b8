//! Base error type for the `tl-*` crates.
//!
//! Sub-crates define their own error enums and either convert into `TlError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `tl-core`.
#[derive(Debug, Error)]
pub enum TlError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tl-core` operations.
pub type TlResult<T> = Result<T, TlError>;
