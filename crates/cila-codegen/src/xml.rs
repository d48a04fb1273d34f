//! XML writer.
//!
//! Walks the document tree and appends to a `String`. An element with no
//! content renders self-closing (`<div />`); attributes render in the order
//! they were set during parsing. Text and attribute values escape `&`, `<`,
//! `>`, and `"`; apostrophes pass through.

use cila_parser::{Document, Element, Node};

/// Render a document as its XML string. Top-level items concatenate with no
/// enclosing wrapper.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Element(el) => render_element(el, out),
    }
}

fn render_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for attr in &el.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        escape_into(&attr.value, out);
        out.push('"');
    }
    if el.content.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &el.content {
        render_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
