//! Block spans and conditional context

use crate::document::Document;

/// A contiguous line span representing one structural element.
///
/// `start` and `end` are inclusive line indices into the owning [`Document`];
/// `indent` is the reference indent of the start line. Blocks are plain index
/// spans, not structural pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
    pub indent: usize,
    /// Set once the match evaluator has approved this block for toggling
    pub matched: bool,
}

impl Block {
    pub fn new(start: usize, end: usize, indent: usize) -> Self {
        Self {
            start,
            end,
            indent,
            matched: false,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }

    /// Accumulated block text for match evaluation
    pub fn text(&self, doc: &Document) -> String {
        doc.span_text(self.start, self.end)
    }
}

/// A preceding conditional-render opener a block is nested inside.
///
/// Detected on the previously *emitted* line, not the raw input line, so
/// earlier transforms in the same pass are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalWrapper {
    pub indent: usize,
}

impl ConditionalWrapper {
    /// Recognize openers like `{hasSession && (` or `{showTab ? (`
    pub fn detect(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.ends_with('(') && (trimmed.contains("&&") || trimmed.contains('?')) {
            let indent = line.chars().take_while(|c| c.is_whitespace()).count();
            Some(Self { indent })
        } else {
            None
        }
    }
}
