//! Reporting seam for notifier output.
//!
//! The notifier writes at most one line per completed diff cycle to either
//! the informational or the warning channel. The channel pair is modeled as
//! the [`Reporter`] trait so hosts can route output wherever they like;
//! [`LogReporter`] is the default and goes through `tracing`.

use std::sync::Arc;

/// Destination for notifier messages.
///
/// Implementations must be cheap to call from a background task; the
/// notifier invokes them from detached measurement tasks, possibly
/// concurrently.
///
/// # Examples
///
/// ```rust
/// use commit_nudge::report::Reporter;
///
/// struct StdoutReporter;
///
/// impl Reporter for StdoutReporter {
///     fn info(&self, message: &str) {
///         println!("{}", message);
///     }
///
///     fn warn(&self, message: &str) {
///         eprintln!("{}", message);
///     }
/// }
/// ```
pub trait Reporter: Send + Sync {
    /// Emit a line on the informational channel.
    fn info(&self, message: &str);

    /// Emit a line on the warning channel.
    fn warn(&self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Default reporter that routes messages through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
