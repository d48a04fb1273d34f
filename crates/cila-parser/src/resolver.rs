//! Line-head classification.
//!
//! Decides what the leading words of a line mean: an explicit tag, an
//! execution-language code, `#id` / `.class` / `key=value` shorthand, or a
//! directive keyword. Scanning is staged word by word; the first word that
//! matches nothing ends the head, and everything from it on is trailing text
//! for the inline parser. A line whose first word already fails is plain
//! prose and opens no element at all.

use crate::ast::Element;
use cila_lexer::scanner::find_brace;
use cila_lexer::{is_arg_directive, is_exec_language, is_flag_directive, is_tag, Words};

/// The outcome of classifying a line's head.
#[derive(Debug)]
pub struct LineHead {
    /// The element the line opens, `None` when the whole line is plain text.
    pub element: Option<Element>,
    /// The line opened an execution block (`pre` with `data-exec`).
    pub exec: bool,
    /// Byte offset where trailing text begins (the line's length or the
    /// offset of an embedded brace when nothing trails).
    pub trailing: usize,
}

/// Classify the head of one line.
pub fn resolve(text: &str) -> LineHead {
    let mut el = Element::new("div");
    let mut tag: Option<&str> = None;
    let mut exec = false;
    let mut write = false;
    let mut matched = false;
    let mut trailing = None;

    let mut words = Words::new(text);
    let mut at_start = true;
    while let Some(word) = words.next() {
        let t = word.text;
        let first = at_start;
        at_start = false;

        if first && is_tag(t) {
            tag = Some(t);
            matched = true;
            continue;
        }
        if first && is_exec_language(t) {
            tag = Some("pre");
            el.set_attr("data-exec", t);
            exec = true;
            matched = true;
            continue;
        }
        if let Some(id) = t.strip_prefix('#') {
            if !id.is_empty() {
                el.set_attr("id", id);
                matched = true;
                continue;
            }
        }
        if let Some(class) = t.strip_prefix('.') {
            if !class.is_empty() {
                el.append_class(class);
                matched = true;
                continue;
            }
        }
        if let Some((key, value)) = t.split_once('=') {
            if is_attr_name(key) {
                el.set_attr(key, value);
                matched = true;
                continue;
            }
        }
        if is_flag_directive(t) {
            el.set_attr(&format!("data-{t}"), "true");
            matched = true;
            continue;
        }
        if is_arg_directive(t) {
            // the rest of the line, up to an embedded brace, is the literal
            // argument; it is never inline-parsed
            let stop = find_brace(text, word.end).unwrap_or(text.len());
            el.set_attr(&format!("data-{t}"), text[word.end..stop].trim());
            if t == "write" {
                write = true;
            }
            matched = true;
            trailing = Some(stop);
            break;
        }

        trailing = Some(word.start);
        break;
    }

    let trailing = trailing.unwrap_or_else(|| words.pos());
    if !matched {
        return LineHead {
            element: None,
            exec: false,
            trailing,
        };
    }
    el.name = tag.unwrap_or(if write { "span" } else { "div" }).to_string();
    LineHead {
        element: Some(el),
        exec,
        trailing,
    }
}

/// Attribute keys look like identifiers: a leading ASCII letter, then
/// alphanumerics, `-`, `_`, or `:`. Anything else (`2+2=4`) is prose.
fn is_attr_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}
