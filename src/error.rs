//! Panel rendering error types.
//!
//! All errors here are precondition failures surfaced synchronously to the
//! caller; the command-handling layer above this crate decides how to word
//! them for the user. Nothing is retried or logged on the way out.

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, PanelError>;

/// A panel could not be rendered from the given playback snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// A now-playing panel was requested but nothing is playing.
    #[error("nothing is currently playing")]
    EmptyPlayback,

    /// A queue panel was requested but nothing is playing.
    #[error("the queue is empty")]
    EmptyQueue,

    /// The requested queue page is past the end of the queue.
    #[error("page {page} is out of range (last page is {max_page})")]
    PageOutOfRange { page: usize, max_page: usize },
}
