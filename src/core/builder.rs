//! Builder for constructing ChangeVolumeNotifier instances.

use crate::core::notifier::{
    ChangeVolumeNotifier, NotifierConfig, DEFAULT_COMMAND, DEFAULT_THRESHOLD,
    IGNORED_PATHS_PRESET,
};
use crate::report::{LogReporter, Reporter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declarative configuration surface for the notifier.
///
/// Every field is optional; missing fields fall back to the builder
/// defaults. This mirrors [`NotifierBuilder`] but can be deserialized from
/// a config file.
///
/// # Examples
///
/// ```rust
/// use commit_nudge::core::Options;
///
/// let options: Options = serde_json::from_str(r#"{
///     "ignored_paths": ["generated/"],
///     "threshold": 100
/// }"#).unwrap();
/// let notifier = options.into_builder().build();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Path substrings to skip on hot update, e.g. `["generated/"]`.
    pub ignored_paths: Vec<String>,
    /// Command run on every hot update. Defaults to `git --no-pager diff`.
    pub command: Option<String>,
    /// Minimum lines of change before the notifier starts warning.
    /// Defaults to 50.
    pub threshold: Option<u32>,
    /// Custom info message. `{threshold}` and `{totalLinesChanged}` are
    /// available as placeholders.
    pub custom_info: Option<String>,
    /// Custom warn message. Same placeholders as `custom_info`.
    pub custom_warn: Option<String>,
}

impl Options {
    /// Convert into a builder for further adjustment.
    pub fn into_builder(self) -> NotifierBuilder {
        let mut builder = NotifierBuilder::new().ignore_paths(self.ignored_paths);
        if let Some(command) = self.command {
            builder = builder.command(command);
        }
        if let Some(threshold) = self.threshold {
            builder = builder.threshold(threshold);
        }
        if let Some(template) = self.custom_info {
            builder = builder.info_template(template);
        }
        if let Some(template) = self.custom_warn {
            builder = builder.warn_template(template);
        }
        builder
    }
}

impl From<Options> for NotifierBuilder {
    fn from(options: Options) -> Self {
        options.into_builder()
    }
}

/// Builder for constructing a [`ChangeVolumeNotifier`].
///
/// # Examples
///
/// ```rust
/// use commit_nudge::prelude::*;
///
/// let notifier = ChangeVolumeNotifier::builder()
///     .ignore_path("vendor/")
///     .threshold(100)
///     .warn_template("⚠ {totalLinesChanged} unstaged lines, commit soon")
///     .build();
/// ```
pub struct NotifierBuilder {
    ignored_paths: Vec<String>,
    command: Option<String>,
    threshold: Option<u32>,
    info_template: Option<String>,
    warn_template: Option<String>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl NotifierBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            ignored_paths: Vec::new(),
            command: None,
            threshold: None,
            info_template: None,
            warn_template: None,
            reporter: None,
        }
    }

    /// Add a single path substring to ignore.
    ///
    /// Events whose path contains the substring are skipped entirely.
    /// Caller entries are appended after the built-in `target/` preset,
    /// preserving order.
    pub fn ignore_path(mut self, path: impl Into<String>) -> Self {
        self.ignored_paths.push(path.into());
        self
    }

    /// Add several path substrings to ignore.
    pub fn ignore_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Set the diff command run on every qualifying event.
    ///
    /// The command is executed through the OS shell, so pipelines and
    /// arguments work as they would on the command line. Defaults to
    /// `git --no-pager diff`.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the info/warn decision boundary.
    ///
    /// A change volume at or above the threshold warns. A threshold of 0 is
    /// treated as unset and falls back to the default of 50.
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Override the informational message.
    ///
    /// `{threshold}` and `{totalLinesChanged}` are replaced with the
    /// configured threshold and the measured change volume. No validation
    /// is performed; unknown placeholder text is emitted verbatim.
    pub fn info_template(mut self, template: impl Into<String>) -> Self {
        self.info_template = Some(template.into());
        self
    }

    /// Override the warning message. Same placeholders as
    /// [`info_template`](Self::info_template).
    pub fn warn_template(mut self, template: impl Into<String>) -> Self {
        self.warn_template = Some(template.into());
        self
    }

    /// Route output through a custom [`Reporter`] instead of `tracing`.
    pub fn reporter<R: Reporter + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Build the notifier.
    ///
    /// The configuration is frozen at this point; the notifier never
    /// mutates it afterwards.
    pub fn build(self) -> ChangeVolumeNotifier {
        let mut ignored_paths: Vec<String> = IGNORED_PATHS_PRESET
            .iter()
            .map(|s| s.to_string())
            .collect();
        ignored_paths.extend(self.ignored_paths);

        let config = NotifierConfig {
            ignored_paths,
            command: self.command.unwrap_or_else(|| DEFAULT_COMMAND.to_string()),
            threshold: self
                .threshold
                .filter(|t| *t != 0)
                .unwrap_or(DEFAULT_THRESHOLD),
            info_template: self.info_template,
            warn_template: self.warn_template,
        };

        ChangeVolumeNotifier::from_parts(
            Arc::new(config),
            self.reporter.unwrap_or_else(|| Arc::new(LogReporter)),
        )
    }
}

impl Default for NotifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
