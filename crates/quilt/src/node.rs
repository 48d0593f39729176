//! The in-memory layout document model.
//!
//! A layout document is parsed fresh from JSON per generation run. The
//! interesting shape is [`LayoutNode`]: a required `type` tag, an arbitrary
//! attribute map, an optional `id`, and optional children (a single object
//! is normalized to a one-element list). The tree is immutable during a
//! generation pass except for resource-key substitution, which rewrites
//! literal values in place before generation.

use indexmap::IndexMap;
use log::warn;
use serde_json::{Map, Value};

use quilt_core::component::ComponentKind;

use crate::QuiltError;

/// One node of a layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    tag: String,
    id: Option<String>,
    attrs: Map<String, Value>,
    children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Builds a node from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::MalformedLayout`] when the value is not an
    /// object or lacks a string `type` tag. Non-object entries in a
    /// `children` array are dropped with a warning.
    pub fn from_value(value: Value, path: &str) -> Result<Self, QuiltError> {
        let Value::Object(mut map) = value else {
            return Err(QuiltError::malformed(path, "layout node must be an object"));
        };

        let tag = match map.shift_remove("type") {
            Some(Value::String(tag)) => tag,
            Some(_) => {
                return Err(QuiltError::malformed(path, "`type` must be a string"));
            }
            None => return Err(QuiltError::malformed(path, "missing `type` tag")),
        };

        let id = match map.shift_remove("id") {
            Some(Value::String(id)) => Some(id),
            Some(other) => {
                warn!(tag, id:? = other; "Ignoring non-string node id");
                None
            }
            None => None,
        };

        let children = match map.shift_remove("children") {
            None | Some(Value::Null) => Vec::new(),
            // A single child object is normalized to a one-element list.
            Some(child @ Value::Object(_)) => vec![Self::from_value(child, path)?],
            Some(Value::Array(items)) => {
                let mut children = Vec::with_capacity(items.len());
                for item in items {
                    if item.is_object() {
                        children.push(Self::from_value(item, path)?);
                    } else {
                        warn!(tag; "Dropping non-object child entry");
                    }
                }
                children
            }
            Some(other) => {
                warn!(tag, children:? = other; "Ignoring malformed children value");
                Vec::new()
            }
        };

        Ok(Self {
            tag,
            id,
            attrs: map,
            children,
        })
    }

    /// Returns the abstract component tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the node's identifier, if declared.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Resolves the component kind for this node, using the presence of
    /// children to pick the fallback for unknown tags.
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::from_tag(&self.tag, !self.children.is_empty())
    }

    /// Returns the attribute map (everything except `type`, `id`, and
    /// `children`).
    pub fn attrs(&self) -> &Map<String, Value> {
        &self.attrs
    }

    /// Mutable access for in-place resource-key substitution.
    pub fn attrs_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.attrs
    }

    /// Looks up one attribute value.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Returns the ordered child list.
    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    /// Mutable access to children for the extraction walk.
    pub fn children_mut(&mut self) -> &mut [LayoutNode] {
        &mut self.children
    }

    /// Merges a style overlay into this node's attributes. Inline
    /// attributes win over inherited style attributes.
    pub fn apply_style(&mut self, overlay: &Map<String, Value>) {
        for (key, value) in overlay {
            if !self.attrs.contains_key(key) {
                self.attrs.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A whole layout file: an optional `data` declaration section plus the
/// root node.
///
/// Accepted shapes: a bare node object, or a wrapper object with a `root`
/// (or `body`) node and an optional `data` array of
/// `{name, class, defaultValue}` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    data: Vec<Value>,
    root: LayoutNode,
}

impl LayoutDocument {
    /// Parses a layout document from JSON source text.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::MalformedLayout`] for unparseable JSON or a
    /// structurally invalid tree.
    pub fn parse(source: &str, path: &str) -> Result<Self, QuiltError> {
        let value: Value = serde_json::from_str(source)
            .map_err(|err| QuiltError::malformed(path, err.to_string()))?;
        Self::from_value(value, path)
    }

    /// Builds a document from a parsed JSON value.
    pub fn from_value(value: Value, path: &str) -> Result<Self, QuiltError> {
        match value {
            Value::Object(mut map) if map.contains_key("root") || map.contains_key("body") => {
                let data = match map.shift_remove("data") {
                    Some(Value::Array(entries)) => entries,
                    Some(entry @ Value::Object(_)) => vec![entry],
                    _ => Vec::new(),
                };
                let root = map
                    .shift_remove("root")
                    .or_else(|| map.shift_remove("body"))
                    .expect("checked for root/body above");
                Ok(Self {
                    data,
                    root: LayoutNode::from_value(root, path)?,
                })
            }
            other => Ok(Self {
                data: Vec::new(),
                root: LayoutNode::from_value(other, path)?,
            }),
        }
    }

    /// Returns the data declaration entries.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Mutable access to data entries for color extraction.
    pub fn data_mut(&mut self) -> &mut [Value] {
        &mut self.data
    }

    /// Returns the root node.
    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    /// Mutable access to the root node.
    pub fn root_mut(&mut self) -> &mut LayoutNode {
        &mut self.root
    }
}

/// A style/theme overlay document: named attribute maps merged into nodes
/// that reference them via a `style` attribute.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: IndexMap<String, Map<String, Value>>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a style sheet from JSON source text. A malformed document is
    /// non-fatal: a warning is logged and an empty sheet returned.
    pub fn parse(source: &str) -> Self {
        match serde_json::from_str::<Value>(source) {
            Ok(Value::Object(map)) => {
                let mut styles = IndexMap::new();
                for (name, value) in map {
                    match value {
                        Value::Object(attrs) => {
                            styles.insert(name, attrs);
                        }
                        other => {
                            warn!(style = name, value:? = other; "Ignoring non-object style entry");
                        }
                    }
                }
                Self { styles }
            }
            Ok(other) => {
                warn!(value:? = other; "Style sheet is not an object; using empty sheet");
                Self::default()
            }
            Err(err) => {
                warn!(err:% = err; "Failed to parse style sheet; using empty sheet");
                Self::default()
            }
        }
    }

    /// Looks up a named style.
    pub fn get(&self, name: &str) -> Option<&Map<String, Value>> {
        self.styles.get(name)
    }

    /// Returns `true` if the sheet has no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_requires_type() {
        let err = LayoutNode::from_value(json!({"text": "hi"}), "a.json").unwrap_err();
        assert!(err.is_malformed());

        let err = LayoutNode::from_value(json!(42), "a.json").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_single_child_normalized() {
        let node = LayoutNode::from_value(
            json!({"type": "VStack", "children": {"type": "Text", "text": "hi"}}),
            "a.json",
        )
        .unwrap();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].tag(), "Text");
    }

    #[test]
    fn test_children_list_and_attrs() {
        let node = LayoutNode::from_value(
            json!({
                "type": "HStack",
                "id": "header",
                "padding": 16,
                "children": [
                    {"type": "Text", "text": "a"},
                    {"type": "Text", "text": "b"}
                ]
            }),
            "a.json",
        )
        .unwrap();

        assert_eq!(node.id(), Some("header"));
        assert_eq!(node.attr("padding"), Some(&json!(16)));
        assert!(node.attr("type").is_none());
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_attribute_order_preserved() {
        let node = LayoutNode::from_value(
            json!({
                "type": "Text",
                "alignTop": true,
                "text": "x",
                "centerHorizontal": true
            }),
            "a.json",
        )
        .unwrap();
        let keys: Vec<_> = node.attrs().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alignTop", "text", "centerHorizontal"]);
    }

    #[test]
    fn test_unknown_kind_fallback() {
        let container = LayoutNode::from_value(
            json!({"type": "Mystery", "children": [{"type": "Text"}]}),
            "a.json",
        )
        .unwrap();
        assert_eq!(container.kind(), ComponentKind::Container);

        let leaf = LayoutNode::from_value(json!({"type": "Mystery"}), "a.json").unwrap();
        assert_eq!(leaf.kind(), ComponentKind::View);
    }

    #[test]
    fn test_style_overlay_inline_wins() {
        let mut node =
            LayoutNode::from_value(json!({"type": "Text", "textColor": "#FF0000"}), "a.json")
                .unwrap();
        let overlay = json!({"textColor": "#000000", "fontSize": 14});
        let Value::Object(overlay) = overlay else {
            unreachable!()
        };
        node.apply_style(&overlay);

        assert_eq!(node.attr("textColor"), Some(&json!("#FF0000")));
        assert_eq!(node.attr("fontSize"), Some(&json!(14)));
    }

    #[test]
    fn test_document_shapes() {
        let bare = LayoutDocument::parse(r#"{"type": "Text"}"#, "a.json").unwrap();
        assert!(bare.data().is_empty());
        assert_eq!(bare.root().tag(), "Text");

        let wrapped = LayoutDocument::parse(
            r##"{
                "data": [{"name": "accent", "class": "Color", "defaultValue": "#FF0000"}],
                "root": {"type": "VStack"}
            }"##,
            "a.json",
        )
        .unwrap();
        assert_eq!(wrapped.data().len(), 1);
        assert_eq!(wrapped.root().tag(), "VStack");
    }

    #[test]
    fn test_document_malformed_json() {
        assert!(LayoutDocument::parse("{not json", "a.json").is_err());
    }

    #[test]
    fn test_style_sheet_parse() {
        let sheet = StyleSheet::parse(r#"{"title": {"fontSize": 20, "fontWeight": "bold"}}"#);
        assert!(sheet.get("title").is_some());
        assert!(sheet.get("missing").is_none());

        let broken = StyleSheet::parse("{nope");
        assert!(broken.is_empty());
    }
}
