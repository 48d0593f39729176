//! Layout classifier: sizing, spacing, orientation, weight, gravity.
//!
//! Width/height/padding/margin values resolve through the dimension
//! resolver; four-element padding/margin arrays are expanded into per-edge
//! keys by the walker before classification, so this classifier only sees
//! scalar (or degenerate array) values for them.

use serde_json::Value;

use quilt_core::{attribute::Classification, dimension};

use super::{NodeContext, binding_text, scalar_text};

pub(crate) fn classify(key: &str, value: &Value, _ctx: &NodeContext) -> Classification {
    if binding_text(value).is_some() {
        // No layout attribute can embed a binding expression.
        return Classification::Deferred;
    }

    match key {
        "width" => Classification::android("layout_width", dimension::resolve(value)),
        "height" => Classification::android("layout_height", dimension::resolve(value)),

        "padding" => Classification::android("padding", dimension::resolve(value)),
        "paddingTop" => Classification::android("paddingTop", dimension::resolve(value)),
        "paddingBottom" => Classification::android("paddingBottom", dimension::resolve(value)),
        "paddingStart" | "paddingLeft" => {
            Classification::android("paddingStart", dimension::resolve(value))
        }
        "paddingEnd" | "paddingRight" => {
            Classification::android("paddingEnd", dimension::resolve(value))
        }
        "paddingHorizontal" => {
            Classification::android("paddingHorizontal", dimension::resolve(value))
        }
        "paddingVertical" => Classification::android("paddingVertical", dimension::resolve(value)),

        "margin" => Classification::android("layout_margin", dimension::resolve(value)),
        "marginTop" => Classification::android("layout_marginTop", dimension::resolve(value)),
        "marginBottom" => Classification::android("layout_marginBottom", dimension::resolve(value)),
        "marginStart" | "marginLeft" => {
            Classification::android("layout_marginStart", dimension::resolve(value))
        }
        "marginEnd" | "marginRight" => {
            Classification::android("layout_marginEnd", dimension::resolve(value))
        }

        "orientation" => match value.as_str() {
            Some("horizontal") | Some("row") => {
                Classification::android("orientation", "horizontal")
            }
            Some("vertical") | Some("column") => {
                Classification::android("orientation", "vertical")
            }
            Some(other) => Classification::android("orientation", other),
            None => Classification::Deferred,
        },

        // Weight is a passthrough numeric-as-string.
        "weight" => match scalar_text(value) {
            Some(text) => Classification::android("layout_weight", text),
            None => Classification::Deferred,
        },

        "gravity" => match value {
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(scalar_text)
                    .map(|t| translate_gravity(&t).to_string())
                    .collect::<Vec<_>>()
                    .join("|");
                if joined.is_empty() {
                    Classification::Deferred
                } else {
                    Classification::android("gravity", joined)
                }
            }
            _ => match scalar_text(value) {
                Some(text) => {
                    Classification::android("gravity", translate_gravity(&text).to_string())
                }
                None => Classification::Deferred,
            },
        },

        _ => Classification::Deferred,
    }
}

/// Translates a gravity token from the layout vocabulary. Unrecognized
/// tokens pass through unchanged.
fn translate_gravity(token: &str) -> &str {
    match token {
        "leading" => "start",
        "trailing" => "end",
        "centerHorizontal" => "center_horizontal",
        "centerVertical" => "center_vertical",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use quilt_core::{attribute::Namespace, component::ComponentKind};

    use super::*;

    fn ctx() -> NodeContext {
        NodeContext {
            kind: ComponentKind::VStack,
            parent: None,
            drawable: false,
        }
    }

    fn matched(key: &str, value: &Value) -> (String, String) {
        let attr = classify(key, value, &ctx())
            .into_matched()
            .expect("expected a matched attribute");
        assert_eq!(attr.namespace, Namespace::Android);
        (attr.name, attr.value)
    }

    #[test]
    fn test_width_height() {
        assert_eq!(
            matched("width", &json!("matchParent")),
            ("layout_width".into(), "match_parent".into())
        );
        assert_eq!(
            matched("height", &json!(48)),
            ("layout_height".into(), "48dp".into())
        );
    }

    #[test]
    fn test_scalar_padding() {
        assert_eq!(
            matched("padding", &json!(16)),
            ("padding".into(), "16dp".into())
        );
        assert_eq!(
            matched("marginTop", &json!("8")),
            ("layout_marginTop".into(), "8dp".into())
        );
    }

    #[test]
    fn test_array_padding_collapses_to_first() {
        // A 4-array on the scalar key (not expanded by the walker) takes
        // its first element.
        assert_eq!(
            matched("padding", &json!([4, 8, 12, 16])),
            ("padding".into(), "4dp".into())
        );
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            matched("orientation", &json!("row")),
            ("orientation".into(), "horizontal".into())
        );
        assert_eq!(
            matched("orientation", &json!("vertical")),
            ("orientation".into(), "vertical".into())
        );
    }

    #[test]
    fn test_weight_passthrough() {
        assert_eq!(
            matched("weight", &json!(1.5)),
            ("layout_weight".into(), "1.5".into())
        );
    }

    #[test]
    fn test_gravity_array_pipe_joined() {
        assert_eq!(
            matched("gravity", &json!(["top", "centerHorizontal"])),
            ("gravity".into(), "top|center_horizontal".into())
        );
    }

    #[test]
    fn test_gravity_vocabulary() {
        assert_eq!(
            matched("gravity", &json!("leading")),
            ("gravity".into(), "start".into())
        );
        // Unrecognized tokens pass through.
        assert_eq!(
            matched("gravity", &json!("fill_horizontal")),
            ("gravity".into(), "fill_horizontal".into())
        );
    }

    #[test]
    fn test_binding_deferred() {
        assert!(classify("width", &json!("@{w}"), &ctx()).is_deferred());
    }

    #[test]
    fn test_unknown_key_deferred() {
        assert!(classify("glow", &json!(3), &ctx()).is_deferred());
    }
}
