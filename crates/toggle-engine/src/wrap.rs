//! Comment wrapper for indentation-delimited blocks
//!
//! One forward pass per rule. Output lines accumulate in a buffer; the only
//! retroactive operation is popping the most recently emitted line when a
//! matched block turns out to be nested in a conditional-render opener, in
//! which case the opener is re-emitted merged with the open sentinel and the
//! trailing closer lines are absorbed into the wrapped region.
//!
//! Wrapping never reflows or re-indents content: apart from the conditional
//! relocation it is a pure insertion of sentinel text around untouched lines.

use crate::block::ConditionalWrapper;
use crate::document::Document;
use crate::matcher;
use crate::rule::RuleStats;
use crate::scan::{BlockFinder, Candidate, find_bare_close, find_region_close};
use crate::style::CommentStyle;

/// Lines whose trimmed text closes a conditional-render expression
fn is_conditional_closer(trimmed: &str) -> bool {
    matches!(trimmed, ")" | ")}")
}

/// Wrap every matching block in comment sentinels (toggle on).
pub fn comment_blocks(
    doc: &Document,
    markers: &[String],
    targets: &[String],
    style: CommentStyle,
) -> (String, RuleStats) {
    let mut out: Vec<String> = Vec::with_capacity(doc.len() + 8);
    let mut stats = RuleStats::default();
    let mut cursor = 0;
    let mut finder = BlockFinder::new(doc, markers, style);

    while let Some(candidate) = finder.next_candidate() {
        let mut block = match candidate {
            Candidate::AlreadyWrapped { start } => {
                stats.candidates += 1;
                stats.already += 1;
                tracing::debug!(line = start + 1, "block already wrapped, passing through");
                continue;
            }
            Candidate::Unclosed { start } => {
                stats.candidates += 1;
                tracing::debug!(line = start + 1, "no terminator before end of document");
                continue;
            }
            Candidate::Closed(block) => block,
        };
        stats.candidates += 1;

        for i in cursor..block.start {
            out.push(doc.line(i).text().to_string());
        }
        cursor = block.start;

        if !matcher::any_target(&block.text(doc), targets) {
            // Unmatched blocks reach the output through the next gap copy,
            // byte-identical to the input.
            continue;
        }
        block.matched = true;
        stats.toggled += 1;

        // Pending emission: if the line just emitted opens a conditional
        // expression the block sits inside, it must be wrapped along with it.
        let cond = out.last().and_then(|l| ConditionalWrapper::detect(l));
        let pending = match cond {
            Some(cond) => out.pop().map(|opener| (cond, opener)),
            None => None,
        };

        if let Some((cond, opener)) = pending {
            let mut next = block.end + 1;
            while next < doc.len() && is_conditional_closer(doc.line(next).trimmed()) {
                next += 1;
            }
            let pad = " ".repeat(cond.indent);
            out.push(format!("{pad}{} {}", style.open(), opener.trim()));
            for i in block.start..=block.end {
                out.push(doc.line(i).text().to_string());
            }
            if next > block.end + 1 {
                // The close sentinel rides on the last absorbed closer line.
                for i in block.end + 1..next - 1 {
                    out.push(doc.line(i).text().to_string());
                }
                out.push(format!("{} {}", doc.line(next - 1).text(), style.close()));
            } else {
                out.push(format!("{pad}{}", style.close()));
            }
            cursor = next;
            finder.skip_to(next);
        } else {
            let pad = " ".repeat(block.indent);
            out.push(format!("{pad}{}", style.open()));
            for i in block.start..=block.end {
                out.push(doc.line(i).text().to_string());
            }
            out.push(format!("{pad}{}", style.close()));
            cursor = block.end + 1;
        }
    }

    for i in cursor..doc.len() {
        out.push(doc.line(i).text().to_string());
    }
    (out.join("\n"), stats)
}

/// Strip the sentinel pairs around matching regions (toggle off), restoring
/// the inner lines untouched.
pub fn uncomment_blocks(doc: &Document, targets: &[String], style: CommentStyle) -> (String, RuleStats) {
    let open = style.open();
    let close = style.close();
    let mut out: Vec<String> = Vec::with_capacity(doc.len());
    let mut stats = RuleStats::default();
    let mut i = 0;

    while i < doc.len() {
        let line = doc.line(i);
        let trimmed = line.trimmed();

        if trimmed == open {
            if let Some(end) = find_bare_close(doc, i, close) {
                stats.candidates += 1;
                let inner = if end > i + 1 {
                    doc.span_text(i + 1, end - 1)
                } else {
                    String::new()
                };
                if matcher::any_target(&inner, targets) {
                    stats.toggled += 1;
                    for k in i + 1..end {
                        out.push(doc.line(k).text().to_string());
                    }
                    i = end + 1;
                    continue;
                }
            }
        } else if let Some(rest) = trimmed.strip_prefix(open) {
            if ConditionalWrapper::detect(rest).is_some() {
                if let Some(end) = find_region_close(doc, i, close) {
                    stats.candidates += 1;
                    let region = conditional_region_text(doc, rest, i, end, close);
                    if matcher::any_target(&region, targets) {
                        stats.toggled += 1;
                        let pad = " ".repeat(line.indent());
                        out.push(format!("{pad}{}", rest.trim_start()));
                        for k in i + 1..end {
                            out.push(doc.line(k).text().to_string());
                        }
                        if let Some(stripped) = strip_merged_close(doc.line(end).text(), close) {
                            out.push(stripped);
                        }
                        i = end + 1;
                        continue;
                    }
                }
            }
        }

        out.push(line.text().to_string());
        i += 1;
    }
    (out.join("\n"), stats)
}

/// Remove a merged close sentinel from the end of a line. Returns `None`
/// for a bare close sentinel line, which is dropped entirely.
fn strip_merged_close(text: &str, close: &str) -> Option<String> {
    let trimmed_end = text.trim_end();
    if trimmed_end.trim() == close {
        return None;
    }
    let stripped = trimmed_end.strip_suffix(close)?;
    Some(stripped.trim_end().to_string())
}

/// The region text a conditional unwrap would restore, for match evaluation
fn conditional_region_text(
    doc: &Document,
    opener_rest: &str,
    start: usize,
    end: usize,
    close: &str,
) -> String {
    let mut parts = vec![opener_rest.trim_start().to_string()];
    for k in start + 1..end {
        parts.push(doc.line(k).text().to_string());
    }
    if let Some(stripped) = strip_merged_close(doc.line(end).text(), close) {
        parts.push(stripped);
    }
    parts.join("\n")
}
