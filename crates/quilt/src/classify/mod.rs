//! Attribute classifiers.
//!
//! Each classifier is a pure function `(key, value, ctx) -> Classification`
//! over a closed attribute vocabulary, one per semantic category. The tree
//! walker offers every node attribute to each stage in a fixed precedence
//! order ([`STAGES`]); matched attributes merge last-wins into the node's
//! attribute set, a [`Classification::Deferred`] result leaves the key to a
//! later stage, and [`Classification::Suppressed`] consumes a recognized
//! key without output (event handlers, composer-owned style keys).
//!
//! Unknown keys fall out of the last stage still deferred and are dropped:
//! the vocabulary is deliberately closed, and unrecognized keys are assumed
//! to be intentional pass-through data for other tooling.

mod alignment;
mod input;
mod layout;
mod style;
mod text;

use serde_json::Value;

use quilt_core::{
    attribute::Classification,
    component::{ComponentKind, ContainerFamily},
};

/// Classification context for one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext {
    /// The node's resolved component kind.
    pub kind: ComponentKind,
    /// The enclosing container, if any.
    pub parent: Option<ParentContext>,
    /// Whether a drawable composer is active for this node. When set, the
    /// style stage suppresses shape and state keys instead of emitting
    /// flat attributes.
    pub drawable: bool,
}

impl NodeContext {
    /// Returns the parent's container family, if there is a parent.
    pub fn parent_family(&self) -> Option<ContainerFamily> {
        self.parent.map(|p| p.family)
    }
}

/// The enclosing container's classification-relevant properties.
#[derive(Debug, Clone, Copy)]
pub struct ParentContext {
    pub family: ContainerFamily,
}

/// One classifier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Layout,
    Alignment,
    Style,
    Text,
    Input,
}

/// Classifier precedence order for one node. Later stages overwrite
/// identically named attributes from earlier stages.
pub const STAGES: [Stage; 5] = [
    Stage::Layout,
    Stage::Alignment,
    Stage::Style,
    Stage::Text,
    Stage::Input,
];

impl Stage {
    /// Offers one key/value pair to this stage's classifier.
    pub fn classify(self, key: &str, value: &Value, ctx: &NodeContext) -> Classification {
        match self {
            Self::Layout => layout::classify(key, value, ctx),
            Self::Alignment => alignment::classify(key, value, ctx),
            Self::Style => style::classify(key, value, ctx),
            Self::Text => text::classify(key, value, ctx),
            Self::Input => input::classify(key, value, ctx),
        }
    }

    /// Returns `true` for the stage whose matched flag attributes merge by
    /// pipe-joining rather than replacement (gravity flags from several
    /// alignment keys collapse into one attribute).
    pub fn merges_flags(self) -> bool {
        self == Self::Alignment
    }
}

/// Renders a scalar JSON value as an attribute string. Objects, arrays,
/// and null have no scalar rendering.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Renders a numeric value (or numeric string) as a truncated integer
/// string, the coercion used for progress/maxLines style attributes.
pub(crate) fn int_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| (f.trunc() as i64).to_string()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .map(|f| (f.trunc() as i64).to_string()),
        _ => None,
    }
}

/// Returns the value as a binding-expression string, if it is one.
pub(crate) fn binding_text(value: &Value) -> Option<&str> {
    value
        .as_str()
        .filter(|s| quilt_core::color::is_binding(s))
}

/// Interprets a flag value: `true`, `"true"`, or a non-zero number.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Pipe-joins the scalar elements of an array value.
pub(crate) fn pipe_join(items: &[Value]) -> String {
    items
        .iter()
        .filter_map(scalar_text)
        .collect::<Vec<_>>()
        .join("|")
}
