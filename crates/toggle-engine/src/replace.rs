//! Plain substitution rules
//!
//! For edits that are not comment toggles: rewriting an expression in place
//! or swapping one literal for another. The literal path guards idempotence
//! by skipping when the replacement text is already present.

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::rule::RuleStats;

/// Regex substitution over the whole source, `(?s)` semantics.
/// `replacement` may reference capture groups (`$1`, `${name}`).
pub fn regex_replace(
    source: &str,
    pattern: &str,
    replacement: &str,
) -> Result<(String, RuleStats)> {
    let re = Regex::new(&format!("(?s){pattern}")).map_err(|e| Error::pattern(pattern, e))?;

    let mut stats = RuleStats::default();
    let result = re.replace_all(source, |caps: &Captures| {
        stats.candidates += 1;
        stats.toggled += 1;
        let mut expanded = String::new();
        caps.expand(replacement, &mut expanded);
        expanded
    });
    Ok((result.into_owned(), stats))
}

/// Literal substitution of every occurrence of `find`, skipped entirely
/// when `replace` already occurs in the source.
pub fn literal_replace(source: &str, find: &str, replace: &str) -> (String, RuleStats) {
    let mut stats = RuleStats::default();
    if source.contains(replace) {
        stats.candidates = 1;
        stats.already = 1;
        return (source.to_string(), stats);
    }
    let occurrences = source.matches(find).count();
    stats.candidates = occurrences;
    stats.toggled = occurrences;
    (source.replace(find, replace), stats)
}
