//! Unified-diff line counting.

/// Added/removed line counts extracted from unified-diff text.
///
/// Counting follows the unified-diff convention: a line is added if it
/// starts with a single `+` and removed if it starts with a single `-`.
/// The two-line file headers (`+++ b/file`, `--- a/file`) that diff tools
/// emit are excluded by requiring the second character to differ from the
/// first.
///
/// # Examples
///
/// ```rust
/// use commit_nudge::core::DiffStats;
///
/// let stats = DiffStats::from_unified("--- a/f\n+++ b/f\n+new line\n-old line\n");
/// assert_eq!(stats.added_lines, 1);
/// assert_eq!(stats.removed_lines, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of added lines.
    pub added_lines: u64,
    /// Number of removed lines.
    pub removed_lines: u64,
}

impl DiffStats {
    /// Count added and removed lines in unified-diff text.
    pub fn from_unified(diff: &str) -> Self {
        let mut stats = Self::default();
        for line in diff.split('\n') {
            let bytes = line.as_bytes();
            match bytes.first() {
                Some(b'+') if bytes.get(1) != Some(&b'+') => stats.added_lines += 1,
                Some(b'-') if bytes.get(1) != Some(&b'-') => stats.removed_lines += 1,
                _ => {}
            }
        }
        stats
    }

    /// The change volume used for the threshold decision.
    ///
    /// This is the larger of the added and removed counts rather than their
    /// sum, so a pure move of N lines counts as N changed lines, not 2N.
    pub fn total_lines_changed(&self) -> u64 {
        self.added_lines.max(self.removed_lines)
    }
}
