//! Line-oriented document model
//!
//! A document is a flat, index-addressable array of lines. Splitting on
//! `\n` and joining on `\n` round-trips the input bytes exactly, including
//! a trailing newline (which appears as a final empty line).

/// One line of a document plus its derived indent width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    indent: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        // Raw count of leading whitespace characters. Tabs count as one
        // character each; widths are never normalized.
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        Self { text, indent }
    }

    /// Raw line text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Leading whitespace width in characters
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Text with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// An ordered sequence of lines, owned by one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Split source text into lines (1:1 with input line breaks)
    pub fn parse(source: &str) -> Self {
        Self {
            lines: source.split('\n').map(Line::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Join the inclusive line span `[start, end]` with `\n`
    pub fn span_text(&self, start: usize, end: usize) -> String {
        self.lines[start..=end]
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Join all lines back into the original text
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
