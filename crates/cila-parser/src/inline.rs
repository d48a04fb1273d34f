//! Inline text grammar.
//!
//! Turns a text span into an ordered content sequence: text runs mixed with
//! emphasis, strong, code spans, math spans, links, autolinks, and
//! interpolation markers. Emphasis and strong recurse into their content;
//! code, math, and interpolation interiors stay verbatim. Every unterminated
//! construct degrades to literal text from its opening delimiter, so the
//! function is total.

use crate::ast::{push_node, Element, Node};
use cila_lexer::Scanner;

/// Characters a backslash can escape to their literal selves.
/// `(` is absent: `\(` opens TeX math instead.
const ESCAPABLE: &[char] = &['`', '|', '*', '_', '[', ']', ')', '{', '}', '\\'];

/// Parse a text span into content items.
pub fn parse_inline(text: &str) -> Vec<Node> {
    let mut items: Vec<Node> = Vec::new();
    let mut run = String::new();
    let mut sc = Scanner::new(text);

    while !sc.is_at_end() {
        let c = sc.peek();
        match c {
            '\\' => {
                if sc.peek_next() == '(' {
                    let mark = sc.mark();
                    sc.bump(2);
                    match sc.scan_to("\\)") {
                        Some(tex) => {
                            flush(&mut items, &mut run);
                            items.push(Node::Element(math_span("math/tex", &tex)));
                        }
                        None => {
                            sc.reset(mark);
                            run.push(sc.advance());
                        }
                    }
                } else if ESCAPABLE.contains(&sc.peek_next()) {
                    run.push(sc.peek_next());
                    sc.bump(2);
                } else {
                    run.push(sc.advance());
                }
            }
            '`' if sc.peek_next() == '`' => {
                let mark = sc.mark();
                sc.bump(2);
                match sc.scan_to("``") {
                    Some(expr) => {
                        flush(&mut items, &mut run);
                        let mut span = Element::new("span");
                        span.set_attr("data-write", expr);
                        items.push(Node::Element(span));
                    }
                    None => {
                        sc.reset(mark);
                        run.push(sc.advance());
                    }
                }
            }
            '`' => {
                let mark = sc.mark();
                sc.bump(1);
                match sc.scan_span('`', true) {
                    Some(code) => {
                        flush(&mut items, &mut run);
                        let mut el = Element::new("code");
                        el.push_text(&code);
                        items.push(Node::Element(el));
                    }
                    None => {
                        sc.reset(mark);
                        run.push(sc.advance());
                    }
                }
            }
            '|' => {
                let mark = sc.mark();
                sc.bump(1);
                match sc.scan_span('|', true) {
                    Some(math) => {
                        flush(&mut items, &mut run);
                        items.push(Node::Element(math_span("math/asciimath", &math)));
                    }
                    None => {
                        sc.reset(mark);
                        run.push(sc.advance());
                    }
                }
            }
            '[' => {
                let mark = sc.mark();
                sc.bump(1);
                match scan_link(&mut sc) {
                    Some((label, url)) => {
                        flush(&mut items, &mut run);
                        let mut a = Element::new("a");
                        a.set_attr("href", url);
                        a.push_text(&label);
                        items.push(Node::Element(a));
                    }
                    None => {
                        sc.reset(mark);
                        run.push(sc.advance());
                    }
                }
            }
            'h' if at_boundary(&sc) && (sc.starts_with("http://") || sc.starts_with("https://")) => {
                let url = sc.scan_word();
                flush(&mut items, &mut run);
                let mut a = Element::new("a");
                a.set_attr("href", &url);
                a.push_text(&url);
                items.push(Node::Element(a));
            }
            '*' | '_' => {
                let mark = sc.mark();
                sc.bump(1);
                match sc.scan_span(c, false) {
                    Some(inner) => {
                        flush(&mut items, &mut run);
                        let mut el = Element::new(if c == '*' { "strong" } else { "em" });
                        for node in parse_inline(&inner) {
                            el.push_node(node);
                        }
                        items.push(Node::Element(el));
                    }
                    None => {
                        sc.reset(mark);
                        run.push(sc.advance());
                    }
                }
            }
            _ => {
                run.push(sc.advance());
            }
        }
    }

    flush(&mut items, &mut run);
    items
}

/// `[label](url)` with both parts literal; escaped `\]` / `\)` resolve.
fn scan_link(sc: &mut Scanner) -> Option<(String, String)> {
    let label = sc.scan_span(']', true)?;
    if sc.peek() != '(' {
        return None;
    }
    sc.bump(1);
    let url = sc.scan_span(')', true)?;
    Some((label, url))
}

/// Autolinks only start at the beginning of the span or after whitespace.
fn at_boundary(sc: &Scanner) -> bool {
    let prev = sc.prev();
    prev == '\0' || prev.is_whitespace()
}

/// `<span class="math"><script type="...">content</script></span>`
fn math_span(script_type: &str, content: &str) -> Element {
    let mut script = Element::new("script");
    script.set_attr("type", script_type);
    script.push_text(content);
    let mut span = Element::new("span");
    span.set_attr("class", "math");
    span.push_node(Node::Element(script));
    span
}

fn flush(items: &mut Vec<Node>, run: &mut String) {
    if !run.is_empty() {
        push_node(items, Node::Text(std::mem::take(run)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(t: &str) -> Node {
        Node::Text(t.to_string())
    }

    fn el(node: &Node) -> &Element {
        match node {
            Node::Element(el) => el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("Hello world"), vec![text("Hello world")]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_emphasis() {
        let items = parse_inline("Some _emphasised_ text");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], text("Some "));
        let em = el(&items[1]);
        assert_eq!(em.name, "em");
        assert_eq!(em.content, vec![text("emphasised")]);
        assert_eq!(items[2], text(" text"));
    }

    #[test]
    fn test_strong_inside_emphasis() {
        let items = parse_inline("_emphasised *strong* text_");
        let em = el(&items[0]);
        assert_eq!(em.name, "em");
        assert_eq!(em.content.len(), 3);
        assert_eq!(el(&em.content[1]).name, "strong");
    }

    #[test]
    fn test_unterminated_emphasis_is_literal() {
        assert_eq!(parse_inline("a_b"), vec![text("a_b")]);
    }

    #[test]
    fn test_code_span_verbatim() {
        let items = parse_inline("`e=mc^2`");
        let code = el(&items[0]);
        assert_eq!(code.name, "code");
        assert_eq!(code.content, vec![text("e=mc^2")]);
    }

    #[test]
    fn test_escaped_backtick_in_text() {
        assert_eq!(
            parse_inline("An escaped backtick \\` within text"),
            vec![text("An escaped backtick ` within text")]
        );
    }

    #[test]
    fn test_escaped_backtick_in_code() {
        let items = parse_inline("`\\``");
        assert_eq!(el(&items[0]).content, vec![text("`")]);
    }

    #[test]
    fn test_code_does_not_recurse() {
        let items = parse_inline("`a _b_ *c*`");
        assert_eq!(el(&items[0]).content, vec![text("a _b_ *c*")]);
    }

    #[test]
    fn test_asciimath() {
        let items = parse_inline("|a_b*c|");
        let span = el(&items[0]);
        assert_eq!(span.name, "span");
        assert_eq!(span.attr("class"), Some("math"));
        let script = el(&span.content[0]);
        assert_eq!(script.attr("type"), Some("math/asciimath"));
        assert_eq!(script.content, vec![text("a_b*c")]);
    }

    #[test]
    fn test_escaped_pipe_in_asciimath() {
        let items = parse_inline("|a\\|b|");
        let script = el(&el(&items[0]).content[0]);
        assert_eq!(script.content, vec![text("a|b")]);
    }

    #[test]
    fn test_tex() {
        let items = parse_inline("\\(e=mc^2\\)");
        let script = el(&el(&items[0]).content[0]);
        assert_eq!(script.attr("type"), Some("math/tex"));
        assert_eq!(script.content, vec![text("e=mc^2")]);
    }

    #[test]
    fn test_link_literal_label() {
        let items = parse_inline("Go to [Google](http://google.com)");
        let a = el(&items[1]);
        assert_eq!(a.name, "a");
        assert_eq!(a.attr("href"), Some("http://google.com"));
        assert_eq!(a.content, vec![text("Google")]);
    }

    #[test]
    fn test_dangling_bracket_is_literal() {
        assert_eq!(parse_inline("a [b c"), vec![text("a [b c")]);
        assert_eq!(parse_inline("[b](c"), vec![text("[b](c")]);
    }

    #[test]
    fn test_autolink() {
        let items = parse_inline("Go to http://google.com now");
        let a = el(&items[1]);
        assert_eq!(a.attr("href"), Some("http://google.com"));
        assert_eq!(a.content, vec![text("http://google.com")]);
        assert_eq!(items[2], text(" now"));
    }

    #[test]
    fn test_autolink_https() {
        let items = parse_inline("https://google.com");
        assert_eq!(el(&items[0]).attr("href"), Some("https://google.com"));
    }

    #[test]
    fn test_autolink_needs_boundary() {
        assert_eq!(parse_inline("xhttp://a"), vec![text("xhttp://a")]);
    }

    #[test]
    fn test_interpolation() {
        let items = parse_inline("The answer is ``6*7``!");
        let span = el(&items[1]);
        assert_eq!(span.name, "span");
        assert_eq!(span.attr("data-write"), Some("6*7"));
        assert!(span.content.is_empty());
        assert_eq!(items[2], text("!"));
    }

    #[test]
    fn test_unterminated_interpolation_is_literal() {
        assert_eq!(parse_inline("``x"), vec![text("``x")]);
    }

    #[test]
    fn test_adjacent_text_merges() {
        // escape then literal text lands in one run
        assert_eq!(parse_inline("\\*a\\*"), vec![text("*a*")]);
    }
}
