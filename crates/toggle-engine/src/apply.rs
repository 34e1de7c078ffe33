//! Rule orchestration over one document's text
//!
//! Rules compose sequentially: rule N's output text is rule N+1's input.
//! A rule that resolves to nothing, or fails to compile, is reported and
//! skipped; it never aborts the remaining rules.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::pattern;
use crate::replace;
use crate::rule::{Rule, RuleKind, RuleOutcome, RuleReport, RuleStats};
use crate::style::CommentStyle;
use crate::wrap;

/// Direction of one engine invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// Wrap matching regions in comment sentinels
    On,
    /// Strip sentinels, restoring the inner text
    Off,
}

/// Result of applying a rule list to one document's text
#[derive(Debug, Clone)]
pub struct Applied {
    pub text: String,
    pub changed: bool,
    pub reports: Vec<RuleReport>,
}

/// Apply an ordered rule list to `source` and report per-rule outcomes.
pub fn apply(source: &str, rules: &[Rule], style: CommentStyle, toggle: Toggle) -> Applied {
    let mut text = source.to_string();
    let mut reports = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, stats) = apply_rule(&text, rule, style, toggle);
        let outcome = stats.outcome();
        if outcome == RuleOutcome::NotFound {
            tracing::debug!(rule = %rule.describe(), "anchor resolved to nothing, rule skipped");
        }
        reports.push(RuleReport {
            rule: rule.describe(),
            outcome,
        });
        text = next;
    }

    let changed = text != source;
    Applied {
        text,
        changed,
        reports,
    }
}

fn apply_rule(text: &str, rule: &Rule, style: CommentStyle, toggle: Toggle) -> (String, RuleStats) {
    match (&rule.kind, toggle) {
        (
            RuleKind::IndentBlock {
                start_markers,
                targets,
            },
            Toggle::On,
        ) => {
            let doc = Document::parse(text);
            wrap::comment_blocks(&doc, start_markers, targets, style)
        }
        (RuleKind::IndentBlock { targets, .. }, Toggle::Off) => {
            let doc = Document::parse(text);
            wrap::uncomment_blocks(&doc, targets, style)
        }
        (RuleKind::Pattern { pattern }, Toggle::On) => {
            recover(text, rule, pattern::comment_matches(text, pattern, style))
        }
        (RuleKind::Pattern { pattern }, Toggle::Off) => {
            recover(text, rule, pattern::uncomment_matches(text, pattern, style))
        }
        (
            RuleKind::RegexReplace {
                pattern,
                replacement,
            },
            Toggle::On,
        ) => recover(text, rule, replace::regex_replace(text, pattern, replacement)),
        (RuleKind::RegexReplace { .. }, Toggle::Off) => {
            tracing::warn!(rule = %rule.describe(), "regex replacement is not invertible, skipping");
            (text.to_string(), RuleStats::default())
        }
        (RuleKind::LiteralReplace { find, replace }, Toggle::On) => {
            replace::literal_replace(text, find, replace)
        }
        // Off swaps the roles, restoring the original literal.
        (RuleKind::LiteralReplace { find, replace }, Toggle::Off) => {
            replace::literal_replace(text, replace, find)
        }
    }
}

/// Per-rule failure isolation: a pattern that cannot compile is logged and
/// treated as resolving to nothing.
fn recover(
    text: &str,
    rule: &Rule,
    result: crate::error::Result<(String, RuleStats)>,
) -> (String, RuleStats) {
    match result {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!(rule = %rule.describe(), error = %e, "rule failed, skipping");
            (text.to_string(), RuleStats::default())
        }
    }
}
