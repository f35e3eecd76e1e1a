//! Message templates and placeholder substitution.

/// Placeholder for the configured threshold.
pub const THRESHOLD_PLACEHOLDER: &str = "{threshold}";

/// Placeholder for the measured change volume.
pub const TOTAL_PLACEHOLDER: &str = "{totalLinesChanged}";

/// Substitute both placeholders in a custom template.
///
/// Only the exact placeholder text is replaced; anything else, including
/// misspelled placeholders, passes through untouched. There is no
/// validation step, so a template without placeholders is emitted as-is.
pub fn render(template: &str, threshold: u32, total_lines_changed: u64) -> String {
    template
        .replace(THRESHOLD_PLACEHOLDER, &threshold.to_string())
        .replace(TOTAL_PLACEHOLDER, &total_lines_changed.to_string())
}

/// Default informational message, used when no custom template is set.
pub fn default_info(threshold: u32, total_lines_changed: u64) -> String {
    format!(
        "All good to go. You have less than {} [{}] lines of unstaged changes.",
        threshold, total_lines_changed
    )
}

/// Default warning message, used when no custom template is set.
pub fn default_warn(total_lines_changed: u64) -> String {
    format!(
        "⛔⛔⛔ You have {} lines of unstaged changes. I think it's time to commit! ⛔⛔⛔",
        total_lines_changed
    )
}
