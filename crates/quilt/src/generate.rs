//! The tree walker and per-file generator.
//!
//! Orchestrates everything above it: for each node, resolve the component
//! kind, expand shorthand attributes, offer every key to the classifier
//! stages in precedence order, compose a drawable when the node's style
//! exceeds flat attributes, and recurse into children. The result is a
//! [`FileOutput`]: the generated node tree plus its drawable artifacts and
//! the bound variables seen across the file.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::debug;
use serde_json::{Map, Value};

use quilt_core::{
    attribute::{Attribute, AttributeSet, Classification},
    component::ContainerFamily,
};
use quilt_parser::BindingRegistry;

use crate::classify::{NodeContext, ParentContext, STAGES, truthy};
use crate::drawable::{self, DrawableSpec};
use crate::node::{LayoutDocument, LayoutNode, StyleSheet};
use crate::resources::ColorTable;

/// One generated output node: concrete view class, resolved attributes,
/// and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedNode {
    pub class: &'static str,
    pub attrs: AttributeSet,
    pub children: Vec<GeneratedNode>,
}

/// A drawable requiring its own resource file, referenced from the node
/// tree by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableArtifact {
    pub name: String,
    pub spec: DrawableSpec,
}

/// Everything generated from one layout file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutput {
    /// The layout file's stem, used for output naming.
    pub name: String,
    pub root: GeneratedNode,
    pub drawables: Vec<DrawableArtifact>,
    /// Bound variables seen across the whole file, de-duplicated in
    /// first-seen order.
    pub variables: Vec<String>,
}

/// Merges style-sheet overlays into every node carrying a `style`
/// attribute. Runs before extraction so overlay literals are extracted
/// like inline ones.
pub fn apply_styles(node: &mut LayoutNode, sheet: &StyleSheet) {
    let style = node
        .attr("style")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(name) = style {
        match sheet.get(&name) {
            Some(overlay) => {
                let overlay = overlay.clone();
                node.apply_style(&overlay);
            }
            None => debug!(style = name; "Unknown style name; leaving node as-is"),
        }
        node.attrs_mut().shift_remove("style");
    }
    for child in node.children_mut() {
        apply_styles(child, sheet);
    }
}

/// Generates the output tree for one layout document.
///
/// `colors` is the batch's color table; composed feedback drawables
/// resolve extracted `@color/` fills through it.
pub fn generate_document(document: &LayoutDocument, name: &str, colors: &ColorTable) -> FileOutput {
    let mut walker = Walker {
        file: name.to_string(),
        drawables: Vec::new(),
        drawable_names: IndexSet::new(),
        bindings: BindingRegistry::new(),
        colors,
    };
    let root = walker.walk(document.root(), None);
    FileOutput {
        name: name.to_string(),
        root,
        drawables: walker.drawables,
        variables: walker.bindings.variables().map(str::to_string).collect(),
    }
}

struct Walker<'a> {
    file: String,
    drawables: Vec<DrawableArtifact>,
    drawable_names: IndexSet<String>,
    bindings: BindingRegistry,
    colors: &'a ColorTable,
}

impl Walker<'_> {
    fn walk(&mut self, node: &LayoutNode, parent: Option<ParentContext>) -> GeneratedNode {
        let kind = node.kind();
        let mut attrs = node.attrs().clone();
        expand_edge_arrays(&mut attrs);
        if parent.map(|p| p.family) == Some(ContainerFamily::Relative) {
            expand_center_flags(&mut attrs);
        }

        self.register_bindings(&attrs);

        let ctx = NodeContext {
            kind,
            parent,
            drawable: drawable::needs_drawable(&attrs, kind),
        };
        let mut set = classify_all(&attrs, &ctx);

        apply_percent_weights(&mut set, node.attrs(), &ctx);

        if ctx.drawable {
            if let Some(spec) = drawable::compose(&attrs, kind, self.colors) {
                let name = self.drawable_name(node);
                set.insert(Attribute::android(
                    "background",
                    format!("@drawable/{name}"),
                ));
                self.drawables.push(DrawableArtifact { name, spec });
            }
        }

        // The id declaration always wins over classifier output.
        if let Some(id) = node.id() {
            set.insert(Attribute::android("id", format!("@+id/{id}")));
        }

        let child_parent = Some(ParentContext {
            family: kind.container_family().unwrap_or(ContainerFamily::Frame),
        });
        let mut children = Vec::with_capacity(node.children().len());
        for child in node.children() {
            children.push(self.walk(child, child_parent));
        }

        GeneratedNode {
            class: kind.android_class(),
            attrs: set,
            children,
        }
    }

    fn register_bindings(&mut self, attrs: &Map<String, Value>) {
        for value in attrs.values() {
            if let Some(text) = value.as_str() {
                if let Some(binding) = quilt_parser::parse(text) {
                    self.bindings.register(&binding);
                }
            }
        }
    }

    /// Mints a file-unique drawable name, preferring the node's id.
    fn drawable_name(&mut self, node: &LayoutNode) -> String {
        let base = match node.id() {
            Some(id) => format!("bg_{}_{}", self.file, slug(id)),
            None => format!("bg_{}", self.file),
        };
        let mut name = base.clone();
        let mut n = 2;
        while self.drawable_names.contains(&name) {
            name = format!("{base}_{n}");
            n += 1;
        }
        self.drawable_names.insert(name.clone());
        name
    }
}

/// Offers every attribute to each stage in precedence order. A key is
/// consumed by the first stage that does not defer; keys deferred by all
/// stages are dropped (closed vocabulary, assumed pass-through data).
fn classify_all(attrs: &Map<String, Value>, ctx: &NodeContext) -> AttributeSet {
    let mut set = AttributeSet::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for stage in STAGES {
        for (key, value) in attrs {
            if claimed.contains(key.as_str()) {
                continue;
            }
            match stage.classify(key, value, ctx) {
                Classification::Matched(attr) => {
                    claimed.insert(key);
                    if stage.merges_flags() {
                        set.merge_flag(attr);
                    } else {
                        set.insert(attr);
                    }
                }
                Classification::Suppressed => {
                    claimed.insert(key);
                }
                Classification::Deferred => {}
            }
        }
    }

    for key in attrs.keys() {
        if !claimed.contains(key.as_str()) {
            debug!(key; "Dropping unrecognized attribute");
        }
    }
    set
}

/// Expands four-element padding/margin arrays into per-edge keys, in
/// top/end/bottom/start order. Other array shapes are left for the
/// classifier's first-element collapse.
fn expand_edge_arrays(attrs: &mut Map<String, Value>) {
    for (key, edges) in [("padding", PADDING_EDGES), ("margin", MARGIN_EDGES)] {
        let values = match attrs.get(key) {
            Some(Value::Array(items)) if items.len() == 4 => items.clone(),
            _ => continue,
        };
        attrs.shift_remove(key);
        for (edge_key, value) in edges.iter().zip(values) {
            attrs.entry(edge_key.to_string()).or_insert(value);
        }
    }
}

const PADDING_EDGES: &[&str] = &["paddingTop", "paddingEnd", "paddingBottom", "paddingStart"];
const MARGIN_EDGES: &[&str] = &["marginTop", "marginEnd", "marginBottom", "marginStart"];

/// Under a relative parent, center flags expand into their edge-flag
/// pairs so each produces independent parent constraints.
fn expand_center_flags(attrs: &mut Map<String, Value>) {
    const EXPANSIONS: &[(&str, &[&str])] = &[
        (
            "centerInParent",
            &["alignTop", "alignBottom", "alignStart", "alignEnd"],
        ),
        ("centerHorizontal", &["alignStart", "alignEnd"]),
        ("centerVertical", &["alignTop", "alignBottom"]),
    ];
    for (flag, edges) in EXPANSIONS {
        if attrs.shift_remove(*flag).is_some_and(|v| truthy(&v)) {
            for edge in *edges {
                attrs.entry(edge.to_string()).or_insert(Value::Bool(true));
            }
        }
    }
}

/// Percentage sizes resolve to a zero-length token; under a linear parent
/// the proportion is recovered as a layout weight.
fn apply_percent_weights(set: &mut AttributeSet, attrs: &Map<String, Value>, ctx: &NodeContext) {
    if ctx.parent_family() != Some(ContainerFamily::Linear) {
        return;
    }
    if set
        .get(quilt_core::attribute::Namespace::Android, "layout_weight")
        .is_some()
    {
        return;
    }
    for key in ["width", "height"] {
        let Some(text) = attrs.get(key).and_then(Value::as_str) else {
            continue;
        };
        let Some(percent) = text.strip_suffix('%').and_then(|n| n.trim().parse::<f64>().ok())
        else {
            continue;
        };
        set.insert(Attribute::android(
            "layout_weight",
            trim_float(percent / 100.0),
        ));
        return;
    }
}

fn trim_float(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
