//! Cila Parser
//!
//! Parses Cila, an indentation-based authoring markup, into a document tree
//! of elements and text runs. The block parser tracks tab indentation line
//! by line (tags, `#id`/`.class`/`key=value` shorthand, directives, lists,
//! sections, embedded `{...}` groups, verbatim execution blocks); the inline
//! parser resolves emphasis, strong, code spans, math, links, autolinks, and
//! interpolation inside any text content.
//!
//! Parsing is permissive and total: every input produces a [`Document`],
//! with unrecognized markup degrading to literal text.
//!
//! ```
//! use cila_parser::{Node, Parser};
//!
//! let doc = Parser::parse("div .note Hello");
//! assert!(matches!(doc.nodes[0], Node::Element(_)));
//! ```

pub mod ast;
pub mod inline;
pub mod parser;
pub mod resolver;

pub use ast::{Attribute, Document, Element, Node};
pub use parser::Parser;
