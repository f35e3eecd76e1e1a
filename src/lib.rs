//! # commit-nudge
//!
//! A development-time reminder that nudges you to commit before unstaged
//! changes pile up.
//!
//! ## Overview
//!
//! `commit-nudge` reacts to file-change events during a live development
//! session. For every qualifying event it runs a diff command against the
//! working tree, counts added and removed lines, and prints either a calm
//! informational message or a warning, depending on whether the change volume
//! crossed a configurable threshold.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use commit_nudge::prelude::*;
//!
//! # async fn example() -> commit_nudge::error::Result<()> {
//! let notifier = ChangeVolumeNotifier::builder()
//!     .ignore_path("node_modules/")
//!     .threshold(100)
//!     .build();
//!
//! // Wire it to a file watcher and let it run for the session
//! let _watcher = notifier.watch(["src"]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Events can also be fed in manually, e.g. from a build tool's own
//! hot-update hook:
//!
//! ```rust,no_run
//! use commit_nudge::prelude::*;
//!
//! # fn example(notifier: &ChangeVolumeNotifier) {
//! notifier.on_change(&ChangeEvent::new("src/main.rs"));
//! # }
//! ```
//!
//! ## Behavior
//!
//! - **Path filtering**: events whose path contains a configured substring
//!   (a one-entry `target/` preset plus your own entries) are skipped without
//!   spawning anything.
//! - **Fire and forget**: each qualifying event spawns one detached diff
//!   measurement. Rapid successive edits may run overlapping measurements
//!   that report independently and out of order.
//! - **Best-effort**: a failing or silent diff command produces no output and
//!   no error. The notifier never halts its host.
//!
//! ## Feature Flags
//!
//! - `file-watch` (default): the [`watch`] module, a `notify`-based event
//!   source for driving the notifier from filesystem changes.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod report;

#[cfg(feature = "file-watch")]
pub mod watch;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ChangeEvent, ChangeVolumeNotifier, NotifierBuilder, Options};
    pub use crate::error::{NudgeError, Result};
    pub use crate::report::Reporter;
}
