//! Block parser for Cila documents.
//!
//! Consumes the source line by line, maintaining a stack of open element
//! frames keyed by tab depth. Each line either opens an element (tag,
//! shorthand, directive), extends a list or section, starts an execution
//! capture, or flows through the paragraph policy as plain prose. Embedded
//! `{...}` groups re-enter the same line grammar with the current element as
//! parent.
//!
//! Parsing is total: every input produces a [`Document`].

use crate::ast::{push_node, Document, Element, Node};
use crate::inline::parse_inline;
use crate::resolver::resolve;
use cila_lexer::scanner::{find_brace, matching_brace};
use cila_lexer::{lines, Line};

/// An open element with the indentation depth at which it was introduced.
#[derive(Debug)]
struct Frame {
    element: Element,
    depth: usize,
    /// Opened by the paragraph policy, not by markup.
    paragraph: bool,
}

/// Verbatim capture state for an execution block.
#[derive(Debug)]
struct Capture {
    depth: usize,
    lines: Vec<String>,
    /// Blank lines seen since the last captured line; emitted only if more
    /// captured content follows, so trailing blanks never pad the block.
    blanks: usize,
}

/// The two list marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn wrapper(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

/// Cila document parser.
///
/// Holds only per-call state (frame stack, paragraph flag, capture) and is
/// reusable: repeated calls to [`Parser::parse_document`] never leak state
/// across parses.
#[derive(Debug, Default)]
pub struct Parser {
    frames: Vec<Frame>,
    nodes: Vec<Node>,
    blank_pending: bool,
    capture: Option<Capture>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse source text into a document. Never fails: unrecognized markup
    /// degrades to literal text.
    pub fn parse(source: &str) -> Document {
        Parser::new().parse_document(source)
    }

    /// Parse with a reusable instance.
    pub fn parse_document(&mut self, source: &str) -> Document {
        self.frames.clear();
        self.nodes.clear();
        self.blank_pending = false;
        self.capture = None;

        for line in lines(source) {
            self.process_line(line);
        }
        if self.capture.is_some() {
            self.finish_capture();
        }
        while !self.frames.is_empty() {
            self.close_top();
        }
        Document {
            nodes: std::mem::take(&mut self.nodes),
        }
    }

    // =========================================================================
    // Line dispatch
    // =========================================================================

    fn process_line(&mut self, line: Line<'_>) {
        if self.capture_line(&line) {
            return;
        }
        if line.is_blank() {
            self.blank_pending = true;
            return;
        }
        let depth = line.indent;
        self.close_at_or_below(depth);
        self.open_line(line.content(), depth, false);
    }

    /// Open whatever one line's content describes. Also used for the interior
    /// of embedded brace groups, where indentation popping is disabled and
    /// execution capture cannot start (`in_group`).
    fn open_line(&mut self, text: &str, depth: usize, in_group: bool) {
        if let Some(heading) = text.strip_prefix('>') {
            self.open_section(heading.trim_start(), depth);
            return;
        }
        if let Some((kind, item)) = list_marker(text) {
            self.open_list_item(kind, item, depth);
            return;
        }

        let head = resolve(text);
        let trailing = &text[head.trailing..];
        match head.element {
            Some(element) => {
                self.blank_pending = false;
                let capture = head.exec
                    && element.attributes.len() == 1
                    && trailing.trim().is_empty();
                self.frames.push(Frame {
                    element,
                    depth,
                    paragraph: false,
                });
                if capture && !in_group {
                    self.capture = Some(Capture {
                        depth,
                        lines: Vec::new(),
                        blanks: 0,
                    });
                } else if head.exec {
                    // code on the block line itself stays verbatim
                    self.attach(Node::Text(trailing.to_string()));
                } else {
                    self.process_trailing(trailing, depth);
                }
            }
            None => self.paragraph_text(trailing, depth),
        }
    }

    // =========================================================================
    // Sections and lists
    // =========================================================================

    /// `> text` wraps a heading in a section whose id slugs the heading.
    fn open_section(&mut self, heading: &str, depth: usize) {
        self.blank_pending = false;
        let mut section = Element::new("section");
        section.set_attr("id", slugify(heading));
        self.frames.push(Frame {
            element: section,
            depth,
            paragraph: false,
        });
        let mut h1 = Element::new("h1");
        for node in parse_inline(heading) {
            h1.push_node(node);
        }
        self.attach(Node::Element(h1));
    }

    fn open_list_item(&mut self, kind: ListKind, item: &str, depth: usize) {
        self.blank_pending = false;
        if !self.reopen_list(kind, depth) {
            self.frames.push(Frame {
                element: Element::new(kind.wrapper()),
                depth,
                paragraph: false,
            });
        }
        self.frames.push(Frame {
            element: Element::new("li"),
            depth,
            paragraph: false,
        });
        self.process_trailing(item, depth);
    }

    /// Consecutive markers of one kind share a wrapper: when the current
    /// parent's last child is a matching `<ul>`/`<ol>`, it is lifted back
    /// onto the stack instead of opening a new one. This also merges items
    /// across adjacent brace groups and resumes an outer list after a nested
    /// list dedents.
    fn reopen_list(&mut self, kind: ListKind, depth: usize) -> bool {
        let content = match self.frames.last_mut() {
            Some(frame) => &mut frame.element.content,
            None => &mut self.nodes,
        };
        let matches_wrapper =
            matches!(content.last(), Some(Node::Element(el)) if el.name == kind.wrapper());
        if !matches_wrapper {
            return false;
        }
        let Some(Node::Element(element)) = content.pop() else {
            return false;
        };
        self.frames.push(Frame {
            element,
            depth,
            paragraph: false,
        });
        true
    }

    // =========================================================================
    // Plain text and paragraphs
    // =========================================================================

    /// Plain prose. A pending blank line opens a fresh paragraph; otherwise
    /// text flows into an open paragraph (merging into its last text run,
    /// with no separator) or lands as raw text in the current parent.
    fn paragraph_text(&mut self, text: &str, depth: usize) {
        if self.blank_pending {
            if self.frames.last().is_some_and(|f| f.paragraph) {
                self.close_top();
            }
            self.frames.push(Frame {
                element: Element::new("p"),
                depth,
                paragraph: true,
            });
            self.blank_pending = false;
        }
        self.process_trailing(text, depth);
    }

    // =========================================================================
    // Trailing text and embedded groups
    // =========================================================================

    /// Trailing text: literal chunks go through the inline parser; each
    /// embedded `{...}` group is re-entered as a line of its own, its frames
    /// closed again at the group's end so `{a}{b}` yields siblings. An
    /// unmatched `{` captures to the end of the text.
    fn process_trailing(&mut self, text: &str, depth: usize) {
        let mut pos = 0;
        while pos < text.len() {
            match find_brace(text, pos) {
                None => {
                    self.push_inline(&text[pos..]);
                    break;
                }
                Some(open) => {
                    self.push_inline(&text[pos..open]);
                    let (interior, next) = match matching_brace(text, open) {
                        Some(close) => (&text[open + 1..close], close + 1),
                        None => (&text[open + 1..], text.len()),
                    };
                    let mark = self.frames.len();
                    self.open_line(interior, depth, true);
                    self.close_to(mark);
                    pos = next;
                }
            }
        }
    }

    fn push_inline(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for node in parse_inline(text) {
            self.attach(node);
        }
    }

    // =========================================================================
    // Execution capture
    // =========================================================================

    /// Returns true while the line was consumed by an open capture. Lines
    /// deeper than the block are captured verbatim, minus the block's own
    /// indent; the first shallower non-blank line ends the capture and is
    /// processed normally.
    fn capture_line(&mut self, line: &Line<'_>) -> bool {
        let Some(cap) = self.capture.as_mut() else {
            return false;
        };
        if line.is_blank() {
            cap.blanks += 1;
            return true;
        }
        if line.indent > cap.depth {
            for _ in 0..cap.blanks {
                cap.lines.push(String::new());
            }
            cap.blanks = 0;
            cap.lines.push(line.raw[cap.depth..].to_string());
            return true;
        }
        self.finish_capture();
        false
    }

    fn finish_capture(&mut self) {
        if let Some(cap) = self.capture.take() {
            let code = cap.lines.join("\n");
            self.attach(Node::Text(code));
        }
    }

    // =========================================================================
    // Frame stack
    // =========================================================================

    fn close_at_or_below(&mut self, depth: usize) {
        while self.frames.last().is_some_and(|f| f.depth >= depth) {
            self.close_top();
        }
    }

    fn close_to(&mut self, len: usize) {
        while self.frames.len() > len {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.attach(Node::Element(frame.element));
        }
    }

    fn attach(&mut self, node: Node) {
        match self.frames.last_mut() {
            Some(frame) => frame.element.push_node(node),
            None => push_node(&mut self.nodes, node),
        }
    }
}

/// Recognize `-`/`- ` bullets and `N.`/`N. ` numbered markers; the number's
/// value is discarded. Digits without a following dot are prose.
fn list_marker(text: &str) -> Option<(ListKind, &str)> {
    if let Some(rest) = text.strip_prefix('-') {
        return Some((ListKind::Bullet, rest.trim_start()));
    }
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = text[digits..].strip_prefix('.') {
            return Some((ListKind::Numbered, rest.trim_start()));
        }
    }
    None
}

/// Lowercase the heading, collapse whitespace runs to single hyphens, and
/// drop anything outside `[a-z0-9-]`.
fn slugify(heading: &str) -> String {
    let mut slug = String::new();
    for c in heading.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c);
        } else if c.is_whitespace() && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
