//! Word tokens for line-head scanning.
//!
//! The head of a Cila line is a run of whitespace-separated words (tag name,
//! `#id`, `.class`, `key=value`, directives). Scanning stops at the first
//! embedded brace, whose interior belongs to the block grammar, not the head.

/// A whitespace-delimited word with its byte offsets within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterator over a line's head words.
///
/// Words are delimited by spaces and tabs and never cross a `{` or `}`.
/// After the iterator yields `None`, [`Words::pos`] is the byte offset of
/// whatever ended the scan: the end of the text or an embedded brace.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset of the next unread word, embedded brace, or end of text.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn skip_spaces(&mut self) {
        let rest = &self.text[self.pos..];
        let trimmed = rest.trim_start_matches([' ', '\t']);
        self.pos += rest.len() - trimmed.len();
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        self.skip_spaces();
        let rest = &self.text[self.pos..];
        if rest.is_empty() || rest.starts_with(['{', '}']) {
            return None;
        }
        let len = rest.find([' ', '\t', '{', '}']).unwrap_or(rest.len());
        let start = self.pos;
        let end = start + len;
        self.pos = end;
        Some(Word {
            text: &self.text[start..end],
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        Words::new(line).map(|w| w.text).collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(texts("div .a-class #an-id"), vec!["div", ".a-class", "#an-id"]);
    }

    #[test]
    fn test_offsets() {
        let ws: Vec<Word> = Words::new("a  href=x").collect();
        assert_eq!(ws[0], Word { text: "a", start: 0, end: 1 });
        assert_eq!(ws[1], Word { text: "href=x", start: 3, end: 9 });
    }

    #[test]
    fn test_stops_at_brace() {
        let mut ws = Words::new("div{div}");
        assert_eq!(ws.next().unwrap().text, "div");
        assert_eq!(ws.next(), None);
        assert_eq!(ws.pos(), 3);
    }

    #[test]
    fn test_brace_after_space() {
        let mut ws = Words::new("div id=yo {a}");
        assert_eq!(ws.next().unwrap().text, "div");
        assert_eq!(ws.next().unwrap().text, "id=yo");
        assert_eq!(ws.next(), None);
        assert_eq!(ws.pos(), 10);
    }

    #[test]
    fn test_leading_brace() {
        let mut ws = Words::new("{ul}");
        assert_eq!(ws.next(), None);
        assert_eq!(ws.pos(), 0);
    }

    #[test]
    fn test_trailing_spaces_consumed() {
        let mut ws = Words::new("div   ");
        assert_eq!(ws.next().unwrap().text, "div");
        assert_eq!(ws.next(), None);
        assert_eq!(ws.pos(), 6);
    }

    #[test]
    fn test_empty() {
        assert!(texts("").is_empty());
    }
}
