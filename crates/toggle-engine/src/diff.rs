//! Line-level change summaries
//!
//! Uses the `similar` crate for a line diff between the original and
//! transformed text, reported alongside the changed/unchanged signal.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Counts of inserted and deleted lines between two versions of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub insertions: usize,
    pub deletions: usize,
}

impl ChangeSummary {
    /// Compute a summary from old and new text
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::default();
        }

        let diff = TextDiff::from_lines(old, new);
        let mut summary = Self::default();
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => summary.insertions += 1,
                ChangeTag::Delete => summary.deletions += 1,
                ChangeTag::Equal => {}
            }
        }
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.insertions == 0 && self.deletions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_is_empty() {
        let summary = ChangeSummary::compute("a\nb\n", "a\nb\n");
        assert!(summary.is_empty());
    }

    #[test]
    fn test_counts_inserted_sentinel_lines() {
        let old = "<Btn />\n";
        let new = "{/*\n<Btn />\n*/}\n";
        let summary = ChangeSummary::compute(old, new);
        assert_eq!(summary.insertions, 2);
        assert_eq!(summary.deletions, 0);
    }

    #[test]
    fn test_counts_rewritten_lines_both_ways() {
        let summary = ChangeSummary::compute("a\nb\n", "a\nc\n");
        assert_eq!(summary.insertions, 1);
        assert_eq!(summary.deletions, 1);
    }
}
