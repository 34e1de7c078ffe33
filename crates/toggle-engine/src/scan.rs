//! Block locator and extent finder
//!
//! A [`BlockFinder`] makes one forward pass over a document and yields
//! candidate blocks in order. It is not restartable; each rule gets a fresh
//! scan. Extent search closes a block only on a line at the *same* indent
//! that is a recognized closing signal. An indentation mismatch never closes
//! a block, even if the content is otherwise unambiguous.
//!
//! Idempotence guard: a candidate whose preceding line carries the open
//! sentinel is reported as already wrapped, and the scan jumps past the
//! whole sentinel region so nothing inside it is examined again.

use crate::block::{Block, ConditionalWrapper};
use crate::document::Document;
use crate::style::CommentStyle;

/// A self-closing end token (`/>`) or an explicit closing tag (`</...>`)
pub fn is_closing_signal(trimmed: &str) -> bool {
    trimmed == "/>" || (trimmed.starts_with("</") && trimmed.ends_with('>'))
}

/// Does `trimmed` begin a candidate block for any of the start markers?
pub fn starts_candidate(trimmed: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| trimmed.starts_with(m.as_str()))
}

/// Find the bare close sentinel line matching an open sentinel line,
/// at the same indent.
pub(crate) fn find_bare_close(doc: &Document, open_line: usize, close: &str) -> Option<usize> {
    let indent = doc.line(open_line).indent();
    (open_line + 1..doc.len())
        .find(|&j| doc.line(j).indent() == indent && doc.line(j).trimmed() == close)
}

/// Find the end of a conditionally wrapped region: either a bare close
/// sentinel at the opener's indent, or a closer line the sentinel was
/// merged onto.
pub(crate) fn find_region_close(doc: &Document, open_line: usize, close: &str) -> Option<usize> {
    let indent = doc.line(open_line).indent();
    (open_line + 1..doc.len()).find(|&j| {
        let t = doc.line(j).trimmed();
        (t == close && doc.line(j).indent() == indent) || (t != close && t.ends_with(close))
    })
}

/// One candidate found by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// A start marker whose preceding line carries the open sentinel;
    /// the region passes through untouched.
    AlreadyWrapped { start: usize },
    /// Extent search hit end-of-document without a terminator; the start
    /// line passes through and scanning resumes on the next line.
    Unclosed { start: usize },
    /// A fully delimited block
    Closed(Block),
}

/// Ordered, single-pass scanner for candidate blocks
pub struct BlockFinder<'a> {
    doc: &'a Document,
    markers: &'a [String],
    open: &'static str,
    close: &'static str,
    pos: usize,
}

impl<'a> BlockFinder<'a> {
    pub fn new(doc: &'a Document, markers: &'a [String], style: CommentStyle) -> Self {
        Self {
            doc,
            markers,
            open: style.open(),
            close: style.close(),
            pos: 0,
        }
    }

    /// Advance the cursor past lines the consumer absorbed itself
    /// (conditional trailing closers).
    pub fn skip_to(&mut self, line: usize) {
        self.pos = self.pos.max(line);
    }

    /// Next candidate in document order, or `None` when the pass is done
    pub fn next_candidate(&mut self) -> Option<Candidate> {
        while self.pos < self.doc.len() {
            let start = self.pos;
            let line = self.doc.line(start);
            let trimmed = line.trimmed();

            // A bare open sentinel line is never re-examined.
            if trimmed == self.open || !starts_candidate(trimmed, self.markers) {
                self.pos += 1;
                continue;
            }

            if let Some(region_end) = self.wrapped_region_end(start) {
                self.pos = region_end;
                return Some(Candidate::AlreadyWrapped { start });
            }

            // A start line that closes itself is a one-line block.
            if trimmed.ends_with("/>") {
                self.pos = start + 1;
                return Some(Candidate::Closed(Block::new(start, start, line.indent())));
            }

            let indent = line.indent();
            for end in start + 1..self.doc.len() {
                let sub = self.doc.line(end);
                if sub.indent() == indent && is_closing_signal(sub.trimmed()) {
                    self.pos = end + 1;
                    return Some(Candidate::Closed(Block::new(start, end, indent)));
                }
            }

            self.pos = start + 1;
            return Some(Candidate::Unclosed { start });
        }
        None
    }

    /// When the line preceding `start` shows the transform was already
    /// applied (the bare open sentinel, or a conditional opener merged with
    /// it), return the first position past the wrapped region.
    fn wrapped_region_end(&self, start: usize) -> Option<usize> {
        if start == 0 {
            return None;
        }
        let prev = start - 1;
        let prev_trimmed = self.doc.line(prev).trimmed();

        if prev_trimmed == self.open {
            let end = find_bare_close(self.doc, prev, self.close);
            return Some(end.map_or(start + 1, |e| e + 1));
        }
        let merged = prev_trimmed
            .strip_prefix(self.open)
            .is_some_and(|rest| ConditionalWrapper::detect(rest).is_some());
        if merged {
            let end = find_region_close(self.doc, prev, self.close);
            return Some(end.map_or(start + 1, |e| e + 1));
        }
        None
    }
}
