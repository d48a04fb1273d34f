//! Physical line splitting.
//!
//! Cila is a line-oriented format: indentation is counted in leading tab
//! characters, and lines that are entirely whitespace are transparent to the
//! block parser. A trailing `\r` is stripped so CRLF input behaves like LF.

/// A physical line of Cila source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line's text, without the terminating newline.
    pub raw: &'a str,
    /// Indentation depth: the count of leading tab characters.
    pub indent: usize,
}

impl Line<'_> {
    /// Whether the line is entirely whitespace (or empty).
    pub fn is_blank(&self) -> bool {
        self.raw.chars().all(char::is_whitespace)
    }

    /// The line's text after its indentation tabs.
    pub fn content(&self) -> &str {
        &self.raw[self.indent..]
    }
}

/// Split source text into physical lines.
pub fn lines(source: &str) -> Vec<Line<'_>> {
    source
        .split('\n')
        .map(|l| {
            let raw = l.strip_suffix('\r').unwrap_or(l);
            let indent = raw.chars().take_while(|&c| c == '\t').count();
            Line { raw, indent }
        })
        .collect()
}
