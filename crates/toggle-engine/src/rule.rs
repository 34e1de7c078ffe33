//! Match rules and per-rule reporting

use serde::{Deserialize, Serialize};

/// One transform instruction applied to a document.
///
/// Rules are the atomic unit of a toggle run. Driver scripts build them in
/// code or deserialize them from JSON; the engine applies them in caller
/// order, each rule consuming the previous rule's output text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable identifier used in reports (e.g., "Trending Topics")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub kind: RuleKind,
}

/// The structural anchor and payload of a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Indentation path: blocks beginning with any `start_markers` prefix,
    /// toggled when any `targets` substring occurs in the block text.
    IndentBlock {
        start_markers: Vec<String>,
        targets: Vec<String>,
    },
    /// Regex path: one pattern whose whole match is the payload to wrap.
    Pattern { pattern: String },
    /// Plain regex substitution (`(?s)` semantics), not sentinel-based.
    RegexReplace { pattern: String, replacement: String },
    /// Literal substitution, skipped when `replace` is already present.
    LiteralReplace { find: String, replace: String },
}

impl Rule {
    pub fn indent_block(
        start_markers: impl IntoIterator<Item = impl Into<String>>,
        targets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: None,
            kind: RuleKind::IndentBlock {
                start_markers: start_markers.into_iter().map(Into::into).collect(),
                targets: targets.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            label: None,
            kind: RuleKind::Pattern {
                pattern: pattern.into(),
            },
        }
    }

    pub fn regex_replace(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            label: None,
            kind: RuleKind::RegexReplace {
                pattern: pattern.into(),
                replacement: replacement.into(),
            },
        }
    }

    pub fn literal_replace(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            label: None,
            kind: RuleKind::LiteralReplace {
                find: find.into(),
                replace: replace.into(),
            },
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label if present, otherwise a short summary of the anchor
    pub fn describe(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match &self.kind {
            RuleKind::IndentBlock { start_markers, .. } => {
                format!("indent-block[{}]", start_markers.join(", "))
            }
            RuleKind::Pattern { pattern } => format!("pattern[{pattern}]"),
            RuleKind::RegexReplace { pattern, .. } => format!("regex-replace[{pattern}]"),
            RuleKind::LiteralReplace { find, .. } => format!("literal-replace[{find}]"),
        }
    }
}

/// Counters accumulated while applying one rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleStats {
    /// Candidate regions the anchor resolved to
    pub candidates: usize,
    /// Regions actually rewritten
    pub toggled: usize,
    /// Regions skipped because the sentinels were already present
    pub already: usize,
}

impl RuleStats {
    pub fn outcome(&self) -> RuleOutcome {
        if self.toggled > 0 {
            RuleOutcome::Matched
        } else if self.already > 0 {
            RuleOutcome::AlreadyApplied
        } else {
            RuleOutcome::NotFound
        }
    }
}

/// Outcome of one rule over one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    /// At least one region was rewritten
    Matched,
    /// Sentinels were already in place; success with no mutation
    AlreadyApplied,
    /// The anchor resolved to nothing; rule skipped
    NotFound,
}

/// Per-rule entry in an apply report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: String,
    pub outcome: RuleOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_outcome_precedence() {
        let matched = RuleStats {
            candidates: 2,
            toggled: 1,
            already: 1,
        };
        assert_eq!(matched.outcome(), RuleOutcome::Matched);

        let already = RuleStats {
            candidates: 1,
            toggled: 0,
            already: 1,
        };
        assert_eq!(already.outcome(), RuleOutcome::AlreadyApplied);

        assert_eq!(RuleStats::default().outcome(), RuleOutcome::NotFound);
    }

    #[test]
    fn test_describe_prefers_label() {
        let rule = Rule::pattern("<Menu\\.Divider\\s*/>").with_label("Menu Divider");
        assert_eq!(rule.describe(), "Menu Divider");
    }

    #[test]
    fn test_rule_roundtrips_through_json() {
        let rule = Rule::indent_block(["<Btn"], ["testID=\"bar\""]).with_label("Bottom bar");
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.describe(), "Bottom bar");
        match back.kind {
            RuleKind::IndentBlock {
                start_markers,
                targets,
            } => {
                assert_eq!(start_markers, vec!["<Btn"]);
                assert_eq!(targets, vec!["testID=\"bar\""]);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_rule_kind_json_tag() {
        let rule = Rule::literal_replace("a", "b");
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["kind"], "literal_replace");
    }
}
