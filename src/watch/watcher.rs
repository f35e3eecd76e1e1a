//! File watching for driving the notifier from filesystem changes.

use crate::core::ChangeEvent;
use crate::error::{NudgeError, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Filesystem event source built on the `notify` crate.
///
/// Watches files or directories and forwards every write/create
/// notification as a [`ChangeEvent`] carrying the affected path. Events are
/// forwarded one-to-one: there is no debouncing or coalescing, so a burst
/// of saves produces a burst of events, matching how the notifier treats
/// manually delivered events.
///
/// # Examples
///
/// ```rust,no_run
/// use commit_nudge::watch::ChangeWatcher;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (watcher, mut rx) = ChangeWatcher::new()?;
/// watcher.watch("src").await?;
///
/// while let Some(event) = rx.recv().await {
///     println!("changed: {}", event.path());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ChangeWatcher {
    watcher: Arc<tokio::sync::Mutex<RecommendedWatcher>>,
    watched_paths: Arc<tokio::sync::Mutex<Vec<PathBuf>>>,
}

impl ChangeWatcher {
    /// Create a new watcher.
    ///
    /// Returns a tuple of (watcher, receiver channel). The receiver gets one
    /// [`ChangeEvent`] per path in every write/create notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying file watcher cannot be created.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<ChangeEvent>)> {
        let (tx, rx) = mpsc::unbounded_channel();

        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                // Only care about write/modify events
                if matches!(
                    event.kind,
                    notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                ) {
                    for path in &event.paths {
                        let change = ChangeEvent::new(path.to_string_lossy());
                        if tx.send(change).is_err() {
                            // Receiver dropped, nothing left to notify
                            return;
                        }
                    }
                }
            }
        })
        .map_err(|e| NudgeError::WatchError(format!("Failed to create file watcher: {}", e)))?;

        Ok((
            Self {
                watcher: Arc::new(tokio::sync::Mutex::new(watcher)),
                watched_paths: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            },
            rx,
        ))
    }

    /// Add a path to watch for changes. Directories are watched recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be watched (e.g., doesn't exist).
    pub async fn watch(&self, path: impl AsRef<Path>) -> Result<()> {
        let canonical_path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| NudgeError::WatchError(format!("Failed to resolve path: {}", e)))?;

        let mut watcher = self.watcher.lock().await;
        watcher
            .watch(&canonical_path, RecursiveMode::Recursive)
            .map_err(|e| NudgeError::WatchError(format!("Failed to watch path: {}", e)))?;

        let mut paths = self.watched_paths.lock().await;
        if !paths.contains(&canonical_path) {
            paths.push(canonical_path);
        }

        Ok(())
    }

    /// Stop watching a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be unwatched.
    pub async fn unwatch(&self, path: impl AsRef<Path>) -> Result<()> {
        let canonical_path = path.as_ref().canonicalize().map_err(|e| {
            NudgeError::WatchError(format!("Failed to resolve path for unwatching: {}", e))
        })?;

        let mut watcher = self.watcher.lock().await;
        watcher
            .unwatch(&canonical_path)
            .map_err(|e| NudgeError::WatchError(format!("Failed to unwatch path: {}", e)))?;

        let mut paths = self.watched_paths.lock().await;
        paths.retain(|p| p != &canonical_path);

        Ok(())
    }

    /// Get a list of currently watched paths.
    pub async fn watched_paths(&self) -> Vec<PathBuf> {
        self.watched_paths.lock().await.clone()
    }
}
