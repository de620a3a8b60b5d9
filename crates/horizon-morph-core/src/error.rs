//! Error types for Horizon Morph core.

/// A specialized Result type for clock operations.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Errors raised by an [`AnimationClock`](crate::AnimationClock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The clock has been disposed and can no longer be started.
    #[error("animation clock has been disposed")]
    Disposed,

    /// A completion wait was interrupted because the clock was disposed.
    #[error("animation clock was disposed before the run completed")]
    Cancelled,

    /// The clock was started outside of a Tokio runtime.
    #[error("animation clock requires a running Tokio runtime")]
    NoRuntime,
}

impl ClockError {
    /// Whether this error is the result of disposal rather than misuse.
    pub fn is_disposal(&self) -> bool {
        matches!(self, Self::Disposed | Self::Cancelled)
    }
}
