use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue was closed; no further values will arrive.
    #[error("queue closed")]
    Closed,

    /// Another thread panicked while holding the slot lock.
    #[error("queue lock poisoned")]
    Poisoned,
}

pub type QueueResult<T> = Result<T, QueueError>;
