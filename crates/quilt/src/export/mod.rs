//! XML rendering of generated trees and drawable specs.
//!
//! A thin formatting pass: the walker hands this module structured
//! attribute lists and specs, and it produces the serialized documents.
//! One attribute per line, four-space indentation, `xmlns` declarations on
//! the root element only for namespaces the tree actually uses.

mod drawable;
mod layout;

pub use drawable::render_drawable;
pub use layout::render_layout;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

const INDENT: &str = "    ";

/// Escapes a value for use inside a double-quoted XML attribute.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
