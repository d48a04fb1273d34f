//! Cila Lexer
//!
//! Low-level text scanning for the Cila markup language: physical line
//! splitting with tab-based indentation, word tokens for line-head scanning,
//! and an escape-aware delimiter scanner driven by the inline parser.
//!
//! Also hosts the recognized vocabulary: element names that may open a line,
//! execution-language codes, and directive keywords. Everything outside these
//! tables is plain prose to the parser.
//!
//! # Example
//!
//! ```
//! use cila_lexer::{is_tag, lines};
//!
//! let ls = lines("div\n\tp");
//! assert_eq!(ls[1].indent, 1);
//! assert!(is_tag("div"));
//! assert!(!is_tag("No"));
//! ```

pub mod line;
pub mod scanner;
pub mod token;

pub use line::{lines, Line};
pub use scanner::Scanner;
pub use token::{Word, Words};

/// Element names recognized at the start of a line.
///
/// Matching is exact and case-sensitive: prose that happens to start with a
/// capitalized word ("No para") never resolves as a tag. Unlisted names fall
/// through to plain-text handling.
pub const TAGS: &[&str] = &[
    "a", "article", "aside", "audio", "b", "blockquote", "br", "button", "canvas", "caption",
    "code", "col", "colgroup", "dd", "details", "div", "dl", "dt", "em", "fieldset", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "i", "iframe",
    "img", "input", "label", "legend", "li", "main", "nav", "ol", "option", "p", "pre", "script",
    "section", "select", "small", "source", "span", "strong", "sub", "summary", "sup", "table",
    "tbody", "td", "textarea", "tfoot", "th", "thead", "tr", "u", "ul", "video",
];

/// Check if a word is a recognized element name.
pub fn is_tag(name: &str) -> bool {
    TAGS.contains(&name)
}

/// Execution-language codes. A line opening with one of these becomes a
/// `<pre data-exec="...">` block whose deeper-indented lines are captured
/// verbatim as code text.
pub const EXEC_LANGUAGES: &[&str] = &["js", "py", "r"];

/// Check if a word is an execution-language code.
pub fn is_exec_language(name: &str) -> bool {
    EXEC_LANGUAGES.contains(&name)
}

/// Directive keywords that take no argument; they become `data-<name>="true"`.
pub const FLAG_DIRECTIVES: &[&str] = &["default", "else"];

/// Check if a word is a no-argument directive.
pub fn is_flag_directive(name: &str) -> bool {
    FLAG_DIRECTIVES.contains(&name)
}

/// Directive keywords that consume the rest of the line (up to an embedded
/// brace group) as a literal argument stored in `data-<name>`.
pub const ARG_DIRECTIVES: &[&str] = &["case", "elif", "for", "if", "include", "switch", "with", "write"];

/// Check if a word is an argument-taking directive.
pub fn is_arg_directive(name: &str) -> bool {
    ARG_DIRECTIVES.contains(&name)
}
