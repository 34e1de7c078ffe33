//! Regex toggler for targets not delimited by indentation
//!
//! Single statements and attribute expressions are anchored by one pattern
//! whose whole body is the payload. Idempotence is the pattern's own
//! concern: an optional sentinel prefix group detects an already-wrapped
//! occurrence and leaves it alone, independent of the indentation path's
//! sentinel skip.
//!
//! Known risk: a payload bounded by a generic closing literal can over-match
//! past the intended element when the same literal recurs in a sibling
//! region. Correct bounding would require nesting depth, which this path
//! deliberately does not track.

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::rule::RuleStats;
use crate::style::CommentStyle;

/// Wrap every occurrence of `pattern` in inline comment sentinels.
///
/// Line breaks are ordinary characters: the pattern is compiled with `(?s)`
/// and may span lines.
pub fn comment_matches(
    source: &str,
    pattern: &str,
    style: CommentStyle,
) -> Result<(String, RuleStats)> {
    let open = regex::escape(style.open());
    let close = regex::escape(style.close());
    let full = format!(r"(?s)(?P<pre>{open}\s*)?(?P<body>{pattern})(?P<post>\s*{close})?");
    let re = Regex::new(&full).map_err(|e| Error::pattern(pattern, e))?;

    let mut stats = RuleStats::default();
    let result = re.replace_all(source, |caps: &Captures| {
        stats.candidates += 1;
        if caps.name("pre").is_some() {
            stats.already += 1;
            caps[0].to_string()
        } else {
            stats.toggled += 1;
            style.wrap_inline(&caps["body"])
        }
    });
    Ok((result.into_owned(), stats))
}

/// Strip inline comment sentinels from every wrapped occurrence of `pattern`.
pub fn uncomment_matches(
    source: &str,
    pattern: &str,
    style: CommentStyle,
) -> Result<(String, RuleStats)> {
    let open = regex::escape(style.open());
    let close = regex::escape(style.close());
    let full = format!(r"(?s){open}\s*(?P<body>{pattern})\s*{close}");
    let re = Regex::new(&full).map_err(|e| Error::pattern(pattern, e))?;

    let mut stats = RuleStats::default();
    let result = re.replace_all(source, |caps: &Captures| {
        stats.candidates += 1;
        stats.toggled += 1;
        caps["body"].to_string()
    });
    Ok((result.into_owned(), stats))
}
