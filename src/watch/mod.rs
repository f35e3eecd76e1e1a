//! Filesystem event source for the notifier.
//!
//! Provides a `notify`-based watcher that turns file modifications into
//! [`ChangeEvent`](crate::core::ChangeEvent)s.

pub mod watcher;

pub use watcher::ChangeWatcher;
