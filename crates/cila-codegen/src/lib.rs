//! Cila Code Generator
//!
//! Serializes a parsed Cila document tree to XML. The rendered string is the
//! externally observable contract of the whole pipeline:
//!
//! ```text
//! source → Parser::parse() → Document → render() → XML string
//! ```
//!
//! Rendering is total: any well-formed document produces a string.

pub mod xml;

pub use xml::render;
