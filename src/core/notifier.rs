//! The notifier reacting to change events with a diff-and-report cycle.

use crate::core::diff::DiffStats;
use crate::core::template;
use crate::report::Reporter;
use std::sync::Arc;
use tokio::process::Command;

/// Built-in ignored-path preset, always prepended to caller entries.
pub(crate) const IGNORED_PATHS_PRESET: [&str; 1] = ["target/"];

/// Diff command used when none is configured.
pub(crate) const DEFAULT_COMMAND: &str = "git --no-pager diff";

/// Info/warn boundary used when none is configured.
pub(crate) const DEFAULT_THRESHOLD: u32 = 50;

/// A file-change notification from the hosting event source.
///
/// Ephemeral; one event is delivered per detected file modification during
/// a development session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    path: String,
}

impl ChangeEvent {
    /// Create an event for the given file path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the file that changed.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Frozen notifier configuration, shared across in-flight measurements.
#[derive(Debug)]
pub(crate) struct NotifierConfig {
    pub(crate) ignored_paths: Vec<String>,
    pub(crate) command: String,
    pub(crate) threshold: u32,
    pub(crate) info_template: Option<String>,
    pub(crate) warn_template: Option<String>,
}

/// Reacts to file-change events by measuring unstaged change volume.
///
/// For each qualifying event the notifier runs the configured diff command,
/// counts added and removed lines in its output, and reports either an
/// informational or a warning message depending on whether the larger of
/// the two counts reached the threshold.
///
/// The notifier is cheap to clone; clones share the same frozen
/// configuration and reporter.
///
/// # Examples
///
/// ```rust,no_run
/// use commit_nudge::prelude::*;
///
/// # fn example() {
/// let notifier = ChangeVolumeNotifier::builder()
///     .threshold(100)
///     .build();
///
/// notifier.on_change(&ChangeEvent::new("src/lib.rs"));
/// # }
/// ```
#[derive(Clone)]
pub struct ChangeVolumeNotifier {
    config: Arc<NotifierConfig>,
    reporter: Arc<dyn Reporter>,
}

impl ChangeVolumeNotifier {
    /// Create a new builder for constructing a notifier.
    pub fn builder() -> crate::core::NotifierBuilder {
        crate::core::NotifierBuilder::new()
    }

    /// Create a notifier with all-default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub(crate) fn from_parts(config: Arc<NotifierConfig>, reporter: Arc<dyn Reporter>) -> Self {
        Self { config, reporter }
    }

    pub(crate) fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Handle one change event.
    ///
    /// If the event path contains any configured ignored substring, this is
    /// a no-op. Otherwise the diff command is spawned on a detached task and
    /// `on_change` returns immediately; the measurement reports on its own
    /// when the command completes. Overlapping measurements from rapid
    /// successive events run concurrently and report out of order relative
    /// to each other. There is no cancellation and no timeout.
    ///
    /// Must be called within a tokio runtime. Never returns an error: a
    /// command that fails to run or prints nothing produces no output at
    /// all.
    pub fn on_change(&self, event: &ChangeEvent) {
        if self.is_ignored(event.path()) {
            tracing::trace!(path = event.path(), "change event ignored");
            return;
        }

        let config = Arc::clone(&self.config);
        let reporter = Arc::clone(&self.reporter);
        tokio::spawn(async move {
            measure_and_report(config, reporter).await;
        });
    }

    /// Whether a path matches any ignored substring. First match wins.
    fn is_ignored(&self, path: &str) -> bool {
        self.config
            .ignored_paths
            .iter()
            .any(|ignored| path.contains(ignored.as_str()))
    }
}

impl Default for ChangeVolumeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// One diff-and-report cycle, bound to a configuration snapshot.
async fn measure_and_report(config: Arc<NotifierConfig>, reporter: Arc<dyn Reporter>) {
    let output = match shell_command(&config.command).output().await {
        Ok(output) => output,
        Err(err) => {
            // Best-effort nudge: spawn failures degrade to silence.
            tracing::debug!(command = %config.command, error = %err, "diff command failed to start");
            return;
        }
    };

    // Exit code and stderr are deliberately not inspected; empty stdout
    // means "nothing to report" whether the command succeeded or not.
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.is_empty() {
        return;
    }

    let stats = DiffStats::from_unified(&stdout);
    report(&config, reporter.as_ref(), stats);
}

/// Decide the branch and emit exactly one line.
fn report(config: &NotifierConfig, reporter: &dyn Reporter, stats: DiffStats) {
    let total = stats.total_lines_changed();
    if total < u64::from(config.threshold) {
        let message = match &config.info_template {
            Some(custom) => template::render(custom, config.threshold, total),
            None => template::default_info(config.threshold, total),
        };
        reporter.info(&message);
    } else {
        let message = match &config.warn_template {
            Some(custom) => template::render(custom, config.threshold, total),
            None => template::default_warn(total),
        };
        reporter.warn(&message);
    }
}

/// Run a command line through the OS shell, capturing stdout.
fn shell_command(command: &str) -> Command {
    #[cfg(unix)]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
}

#[cfg(feature = "file-watch")]
impl ChangeVolumeNotifier {
    /// Watch the given paths and feed every change event into
    /// [`on_change`](Self::on_change).
    ///
    /// Events are forwarded one-to-one with no debouncing, so rapid edits
    /// behave exactly as they would with manually delivered events. Watching
    /// stops when the returned watcher is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the watcher cannot be created or any path cannot
    /// be watched.
    pub async fn watch<I, P>(&self, paths: I) -> crate::error::Result<crate::watch::ChangeWatcher>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<std::path::Path>,
    {
        let (watcher, mut rx) = crate::watch::ChangeWatcher::new()?;
        for path in paths {
            watcher.watch(path).await?;
        }

        let notifier = self.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                notifier.on_change(&event);
            }
        });

        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureReporter {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl Reporter for CaptureReporter {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(("info", message.to_string()));
        }

        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(("warn", message.to_string()));
        }
    }

    fn config(threshold: u32) -> NotifierConfig {
        NotifierConfig {
            ignored_paths: vec!["target/".to_string()],
            command: DEFAULT_COMMAND.to_string(),
            threshold,
            info_template: None,
            warn_template: None,
        }
    }

    fn stats(added: u64, removed: u64) -> DiffStats {
        DiffStats {
            added_lines: added,
            removed_lines: removed,
        }
    }

    #[test]
    fn test_below_threshold_reports_info() {
        let capture = CaptureReporter::default();
        report(&config(50), &capture, stats(10, 4));

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, "info");
        assert_eq!(
            lines[0].1,
            "All good to go. You have less than 50 [10] lines of unstaged changes."
        );
    }

    #[test]
    fn test_at_threshold_reports_warn() {
        let capture = CaptureReporter::default();
        report(&config(50), &capture, stats(50, 0));

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, "warn");
    }

    #[test]
    fn test_above_threshold_warn_mentions_total() {
        let capture = CaptureReporter::default();
        report(&config(50), &capture, stats(60, 5));

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines[0].0, "warn");
        assert!(lines[0].1.contains("You have 60 lines of unstaged changes."));
    }

    #[test]
    fn test_custom_templates_substituted() {
        let capture = CaptureReporter::default();
        let mut cfg = config(50);
        cfg.info_template = Some("T={threshold} C={totalLinesChanged}".to_string());
        report(&cfg, &capture, stats(10, 2));

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines[0], ("info", "T=50 C=10".to_string()));
    }

    #[test]
    fn test_custom_warn_template() {
        let capture = CaptureReporter::default();
        let mut cfg = config(10);
        cfg.warn_template = Some("{totalLinesChanged} over {threshold}".to_string());
        report(&cfg, &capture, stats(12, 30));

        let lines = capture.lines.lock().unwrap();
        assert_eq!(lines[0], ("warn", "30 over 10".to_string()));
    }

    #[test]
    fn test_is_ignored_matches_substring() {
        let notifier = ChangeVolumeNotifier::builder()
            .ignore_path("generated/")
            .build();

        assert!(notifier.is_ignored("target/debug/build.rs"));
        assert!(notifier.is_ignored("app/generated/schema.rs"));
        assert!(!notifier.is_ignored("src/main.rs"));
    }

    #[tokio::test]
    async fn test_empty_stdout_reports_nothing() {
        let capture = Arc::new(CaptureReporter::default());
        let cfg = Arc::new(NotifierConfig {
            command: "true".to_string(),
            ..config(50)
        });

        measure_and_report(cfg, capture.clone()).await;
        assert!(capture.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_command_reports_nothing() {
        let capture = Arc::new(CaptureReporter::default());
        let cfg = Arc::new(NotifierConfig {
            command: "definitely-not-a-real-command-xyz".to_string(),
            ..config(50)
        });

        measure_and_report(cfg, capture.clone()).await;
        assert!(capture.lines.lock().unwrap().is_empty());
    }
}
