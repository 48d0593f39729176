//! Layout XML serialization.

use quilt_core::attribute::Namespace;

use super::{INDENT, XML_HEADER, escape};
use crate::generate::GeneratedNode;

/// Renders a generated node tree as a layout XML document.
pub fn render_layout(root: &GeneratedNode) -> String {
    let mut out = String::new();
    out.push_str(XML_HEADER);
    out.push('\n');
    write_node(&mut out, root, 0, Some(used_namespaces(root)));
    out
}

/// Collects the namespaces used anywhere in the tree, in declaration
/// order.
fn used_namespaces(root: &GeneratedNode) -> Vec<Namespace> {
    let mut used = Vec::new();
    collect_namespaces(root, &mut used);
    let order = [Namespace::Android, Namespace::App, Namespace::Tools];
    order.into_iter().filter(|ns| used.contains(ns)).collect()
}

fn collect_namespaces(node: &GeneratedNode, used: &mut Vec<Namespace>) {
    for attr in &node.attrs {
        if !used.contains(&attr.namespace) {
            used.push(attr.namespace);
        }
    }
    for child in &node.children {
        collect_namespaces(child, used);
    }
}

fn write_node(
    out: &mut String,
    node: &GeneratedNode,
    depth: usize,
    root_namespaces: Option<Vec<Namespace>>,
) {
    let pad = INDENT.repeat(depth);
    let attr_pad = INDENT.repeat(depth + 1);

    out.push_str(&pad);
    out.push('<');
    out.push_str(node.class);

    if let Some(namespaces) = root_namespaces {
        for ns in namespaces {
            out.push('\n');
            out.push_str(&attr_pad);
            out.push_str(&format!("xmlns:{}=\"{}\"", ns.prefix(), ns.uri()));
        }
    }

    for attr in &node.attrs {
        out.push('\n');
        out.push_str(&attr_pad);
        out.push_str(&format!(
            "{}=\"{}\"",
            attr.qualified_name(),
            escape(&attr.value)
        ));
    }

    if node.children.is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push_str(">\n");
    for child in &node.children {
        out.push('\n');
        write_node(out, child, depth + 1, None);
    }
    out.push('\n');
    out.push_str(&pad);
    out.push_str(&format!("</{}>\n", node.class));
}
