//! Text classifier: content, hints, font, and text styling.
//!
//! `text` and `hint` are the two keys that explicitly support binding
//! expressions: their payloads are rewritten into the target binding
//! syntax through the binding parser. The generic `color` key is
//! ambiguous and is disambiguated by component type: text-bearing
//! components get a foreground text color, everything else a tint.

use serde_json::Value;

use quilt_core::{attribute::Classification, color};

use super::{NodeContext, int_text, scalar_text};

pub(crate) fn classify(key: &str, value: &Value, ctx: &NodeContext) -> Classification {
    match key {
        "text" | "hint" => {
            let name = if key == "text" { "text" } else { "hint" };
            match value.as_str() {
                Some(text) => match quilt_parser::parse(text) {
                    Some(binding) => Classification::android(name, binding.rewritten),
                    None => Classification::android(name, text),
                },
                None => match scalar_text(value) {
                    Some(text) => Classification::android(name, text),
                    None => Classification::Deferred,
                },
            }
        }

        "color" => match value.as_str() {
            Some(text) if color::is_binding(text) => Classification::Deferred,
            Some(text) => {
                let name = if ctx.kind.is_text_bearing() {
                    "textColor"
                } else {
                    "tint"
                };
                Classification::android(name, color::resolve(text))
            }
            None => Classification::Deferred,
        },

        "textColor" => match value.as_str() {
            Some(text) if color::is_binding(text) => Classification::Deferred,
            Some(text) => Classification::android("textColor", color::resolve(text)),
            None => Classification::Deferred,
        },

        "fontSize" | "textSize" => match value {
            Value::String(s) if s.trim().parse::<f64>().is_err() => {
                // Already-suffixed sizes ("18sp") pass through.
                Classification::android("textSize", s.clone())
            }
            _ => match int_text(value) {
                Some(size) => Classification::android("textSize", format!("{size}sp")),
                None => Classification::Deferred,
            },
        },

        "fontWeight" => match value.as_str() {
            Some("bold") => Classification::android("textStyle", "bold"),
            Some("normal") => Classification::android("textStyle", "normal"),
            // Unrecognized weights emit nothing.
            _ => Classification::Deferred,
        },

        "font" | "fontFamily" => match value.as_str() {
            Some(family) => Classification::android("fontFamily", family),
            None => Classification::Deferred,
        },

        "textAlign" => match value.as_str() {
            Some("start") | Some("left") => Classification::android("textAlignment", "viewStart"),
            Some("end") | Some("right") => Classification::android("textAlignment", "viewEnd"),
            Some("center") => Classification::android("textAlignment", "center"),
            Some(other) => Classification::android("textAlignment", other),
            None => Classification::Deferred,
        },

        "maxLines" => match int_text(value) {
            Some(lines) => Classification::android("maxLines", lines),
            None => Classification::Deferred,
        },

        "ellipsize" => match value {
            Value::Bool(true) => Classification::android("ellipsize", "end"),
            Value::Bool(false) => Classification::Suppressed,
            Value::String(mode) => Classification::android("ellipsize", mode.clone()),
            _ => Classification::Deferred,
        },

        _ => Classification::Deferred,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use quilt_core::component::ComponentKind;

    use super::*;

    fn ctx(kind: ComponentKind) -> NodeContext {
        NodeContext {
            kind,
            parent: None,
            drawable: false,
        }
    }

    fn matched(key: &str, value: &Value, kind: ComponentKind) -> (String, String) {
        let attr = classify(key, value, &ctx(kind))
            .into_matched()
            .expect("expected a matched attribute");
        (attr.name, attr.value)
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(
            matched("text", &json!("Hello"), ComponentKind::Text),
            ("text".into(), "Hello".into())
        );
    }

    #[test]
    fn test_bound_text_rewritten() {
        assert_eq!(
            matched("text", &json!("@{title}"), ComponentKind::Text),
            ("text".into(), "@{data.title}".into())
        );
        assert_eq!(
            matched("hint", &json!("${user.name}"), ComponentKind::TextField),
            ("hint".into(), "@{user.name}".into())
        );
    }

    #[test]
    fn test_color_disambiguation() {
        assert_eq!(
            matched("color", &json!("black"), ComponentKind::Text),
            ("textColor".into(), "#000000".into())
        );
        assert_eq!(
            matched("color", &json!("black"), ComponentKind::Image),
            ("tint".into(), "#000000".into())
        );
    }

    #[test]
    fn test_color_binding_deferred() {
        assert!(classify("color", &json!("@{themeColor}"), &ctx(ComponentKind::Text)).is_deferred());
    }

    #[test]
    fn test_font_size() {
        assert_eq!(
            matched("fontSize", &json!(18.7), ComponentKind::Text),
            ("textSize".into(), "18sp".into())
        );
        assert_eq!(
            matched("fontSize", &json!("20sp"), ComponentKind::Text),
            ("textSize".into(), "20sp".into())
        );
    }

    #[test]
    fn test_font_weight() {
        assert_eq!(
            matched("fontWeight", &json!("bold"), ComponentKind::Text),
            ("textStyle".into(), "bold".into())
        );
        assert!(classify("fontWeight", &json!("850"), &ctx(ComponentKind::Text)).is_deferred());
    }

    #[test]
    fn test_max_lines_and_ellipsize() {
        assert_eq!(
            matched("maxLines", &json!(2.9), ComponentKind::Text),
            ("maxLines".into(), "2".into())
        );
        assert_eq!(
            matched("ellipsize", &json!(true), ComponentKind::Text),
            ("ellipsize".into(), "end".into())
        );
        assert_eq!(
            matched("ellipsize", &json!("middle"), ComponentKind::Text),
            ("ellipsize".into(), "middle".into())
        );
    }

    #[test]
    fn test_unknown_key_deferred() {
        assert!(classify("width", &json!(10), &ctx(ComponentKind::Text)).is_deferred());
    }
}
