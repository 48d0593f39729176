//! Alignment and relative-positioning classifier.
//!
//! The same logical intent maps to different output constructs depending
//! on the parent's container family: edge-alignment flags collapse into a
//! single `layout_gravity` attribute under linear and frame parents (the
//! walker pipe-joins successive flags), while under relative parents each
//! flag produces an independent edge constraint against the parent.
//! View-relative positioning keys always produce an edge constraint
//! referencing another node's identifier, regardless of family.
//!
//! Center flags (`centerHorizontal`, `centerVertical`, `centerInParent`)
//! under a relative parent are expanded by the walker into their
//! edge-flag pairs before classification, so this classifier only sees
//! them in gravity-flag form.

use serde_json::Value;

use quilt_core::{attribute::Classification, component::ContainerFamily};

use super::{NodeContext, binding_text, truthy};

pub(crate) fn classify(key: &str, value: &Value, ctx: &NodeContext) -> Classification {
    if binding_text(value).is_some() {
        return Classification::Deferred;
    }

    // View-relative positioning: constraint attributes in every family.
    if let Some(constraint) = view_relative_constraint(key) {
        return match value.as_str() {
            Some(target) if !target.is_empty() => {
                Classification::app(constraint, format!("@id/{target}"))
            }
            _ => Classification::Deferred,
        };
    }

    let Some(flag) = edge_flag(key) else {
        return Classification::Deferred;
    };
    if !truthy(value) {
        // Recognized flag, explicitly off: nothing to emit.
        return Classification::Suppressed;
    }

    match ctx.parent_family() {
        Some(ContainerFamily::Relative) => match flag.parent_constraint {
            Some((name, target)) => Classification::app(name, target),
            // Center flags are expanded before classification; a leftover
            // one degrades to its gravity form.
            None => Classification::android("layout_gravity", flag.gravity),
        },
        _ => Classification::android("layout_gravity", flag.gravity),
    }
}

struct EdgeFlag {
    gravity: &'static str,
    parent_constraint: Option<(&'static str, &'static str)>,
}

fn edge_flag(key: &str) -> Option<EdgeFlag> {
    let (gravity, parent_constraint) = match key {
        "alignTop" => ("top", Some(("layout_constraintTop_toTopOf", "parent"))),
        "alignBottom" => (
            "bottom",
            Some(("layout_constraintBottom_toBottomOf", "parent")),
        ),
        "alignStart" | "alignLeft" => {
            ("start", Some(("layout_constraintStart_toStartOf", "parent")))
        }
        "alignEnd" | "alignRight" => ("end", Some(("layout_constraintEnd_toEndOf", "parent"))),
        "centerHorizontal" => ("center_horizontal", None),
        "centerVertical" => ("center_vertical", None),
        "centerInParent" => ("center", None),
        _ => return None,
    };
    Some(EdgeFlag {
        gravity,
        parent_constraint,
    })
}

/// Maps a view-relative positioning key to its constraint attribute.
fn view_relative_constraint(key: &str) -> Option<&'static str> {
    match key {
        "above" => Some("layout_constraintBottom_toTopOf"),
        "below" => Some("layout_constraintTop_toBottomOf"),
        "toLeftOf" | "toStartOf" => Some("layout_constraintEnd_toStartOf"),
        "toRightOf" | "toEndOf" => Some("layout_constraintStart_toEndOf"),
        "alignTopOfView" => Some("layout_constraintTop_toTopOf"),
        "alignBottomOfView" => Some("layout_constraintBottom_toBottomOf"),
        _ => None,
    }
}
