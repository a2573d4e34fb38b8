use std::io;

use thiserror::Error;
use tl_core::TlError;
use tl_sync::QueueError;

#[derive(Debug, Error)]
pub enum LightError {
    #[error(transparent)]
    Config(#[from] TlError),

    /// `simulate` was called while the cycle thread is already running.
    #[error("cycle already running")]
    AlreadyRunning,

    /// The light has been shut down; no further transitions will arrive.
    #[error("light stopped")]
    Stopped,

    #[error("failed to spawn cycle thread: {0}")]
    Spawn(#[from] io::Error),

    /// A thread panicked while holding the named internal lock.
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    /// The cycle thread panicked; observed state may be stale.
    #[error("cycle thread panicked")]
    CyclePanicked,
}

impl From<QueueError> for LightError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::Closed   => LightError::Stopped,
            QueueError::Poisoned => LightError::Poisoned("phase queue"),
        }
    }
}

pub type LightResult<T> = Result<T, LightError>;
