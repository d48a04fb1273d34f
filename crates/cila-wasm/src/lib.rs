//! WASM bindings for the Cila converter.
//!
//! Exposes `to_xml()` to JavaScript via wasm-bindgen. Parsing is permissive,
//! so the binding never throws: any input string yields an XML string.

use wasm_bindgen::prelude::*;

/// Convert Cila source to its XML rendering.
#[wasm_bindgen]
pub fn to_xml(source: &str) -> String {
    let doc = cila_parser::Parser::parse(source);
    cila_codegen::render(&doc)
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
