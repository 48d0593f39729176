//! The resource extraction walk.
//!
//! Runs before generation: visits every node of an in-memory layout
//! document, extracts string and color literals into the batch's tables,
//! and rewrites the extracted values in place as `@string/...` and
//! `@color/...` references. The on-disk source file is never touched.

use serde_json::Value;

use crate::node::{LayoutDocument, LayoutNode};
use crate::resources::{ColorTable, StringTable};

/// Attribute keys whose string values are string-extractable.
pub const STRING_KEYS: &[&str] = &["text", "hint"];

/// Attribute keys whose string values are color-extractable.
pub const COLOR_KEYS: &[&str] = &["background", "color", "textColor", "tint", "borderColor"];

/// Extracts string and color literals from a whole document, rewriting
/// them in place. `prefix` namespaces the minted string keys and is
/// derived from the layout file's stem.
pub fn extract_document(
    document: &mut LayoutDocument,
    prefix: &str,
    strings: &mut StringTable,
    colors: &mut ColorTable,
) {
    for entry in document.data_mut() {
        extract_data_entry(entry, colors);
    }
    extract_node(document.root_mut(), prefix, strings, colors);
}

fn extract_node(
    node: &mut LayoutNode,
    prefix: &str,
    strings: &mut StringTable,
    colors: &mut ColorTable,
) {
    let attrs = node.attrs_mut();
    for key in STRING_KEYS {
        if let Some(Value::String(text)) = attrs.get(*key) {
            if let Some(full_key) = strings.extract(prefix, text) {
                attrs[*key] = Value::String(format!("@string/{full_key}"));
            }
        }
    }
    for key in COLOR_KEYS {
        if let Some(Value::String(text)) = attrs.get(*key) {
            if let Some(color_key) = colors.extract(text) {
                attrs[*key] = Value::String(format!("@color/{color_key}"));
            }
        }
    }

    for child in node.children_mut() {
        extract_node(child, prefix, strings, colors);
    }
}

/// Rewrites the `defaultValue` of a `{class: "Color", ...}` data entry.
/// Other classes and binding expressions are left alone.
fn extract_data_entry(entry: &mut Value, colors: &mut ColorTable) {
    let Value::Object(map) = entry else {
        return;
    };
    if map.get("class").and_then(Value::as_str) != Some("Color") {
        return;
    }
    let Some(Value::String(default)) = map.get("defaultValue") else {
        return;
    };
    if let Some(key) = colors.extract(default) {
        map["defaultValue"] = Value::String(format!("@color/{key}"));
    }
}
