//! Error types for commit-nudge.

/// Result type alias for commit-nudge operations.
pub type Result<T> = std::result::Result<T, NudgeError>;

/// Errors that can occur while setting up the notifier.
///
/// Note that the notification cycle itself is deliberately infallible:
/// a diff command that fails to run or produces no output degrades to
/// silence rather than an error. Only setup paths (file watching) report
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum NudgeError {
    /// File watching is not supported or failed to initialize.
    #[error("File watching error: {0}")]
    WatchError(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Notifier error: {0}")]
    Other(String),
}
