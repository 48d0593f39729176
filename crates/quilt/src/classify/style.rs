//! Style/appearance classifier.
//!
//! Covers background, opacity, visibility, interactivity flags, image
//! sources, tint, elevation, and safe-area insets. When a drawable
//! composer is active for the node, shape and state keys (corner radius,
//! border, gradient, per-state backgrounds, ripple hints, and the
//! background itself) are suppressed here: the composer owns them and the
//! node's background becomes a drawable reference instead.

use serde_json::Value;

use quilt_core::{attribute::Classification, color, dimension};

use super::{NodeContext, binding_text, pipe_join, scalar_text};

/// Keys owned by the drawable composer whenever one is active.
const COMPOSER_KEYS: &[&str] = &[
    "cornerRadius",
    "borderWidth",
    "borderColor",
    "gradient",
    "pressedBackground",
    "disabledBackground",
    "selectedBackground",
    "focusedBackground",
    "checkedBackground",
    "rippleColor",
    "tapBackground",
];

pub(crate) fn classify(key: &str, value: &Value, ctx: &NodeContext) -> Classification {
    if COMPOSER_KEYS.contains(&key) {
        return if ctx.drawable {
            Classification::Suppressed
        } else {
            Classification::Deferred
        };
    }

    match key {
        "background" => {
            if ctx.drawable {
                // The composer folds the base background into its spec.
                return Classification::Suppressed;
            }
            match value.as_str() {
                Some(text) if color::is_binding(text) => Classification::Deferred,
                Some(text) => Classification::android("background", color::resolve(text)),
                None => Classification::Deferred,
            }
        }

        "opacity" | "alpha" => match binding_text(value) {
            Some(_) => Classification::Deferred,
            None => match scalar_text(value) {
                Some(text) => Classification::android("alpha", text),
                None => Classification::Deferred,
            },
        },

        "visibility" => match value.as_str() {
            // Binding-valued visibility is passed through for the runtime
            // to resolve, never collapsed to a static token.
            Some(text) if color::is_binding(text) => {
                Classification::android("visibility", text)
            }
            Some("visible") => Classification::android("visibility", "visible"),
            Some("invisible") => Classification::android("visibility", "invisible"),
            Some("gone") | Some("hidden") => Classification::android("visibility", "gone"),
            Some(other) => Classification::android("visibility", other),
            None => Classification::Deferred,
        },

        "clickable" | "focusable" | "enabled" => match binding_text(value) {
            Some(_) => Classification::Deferred,
            None => match value.as_bool() {
                Some(flag) => Classification::android(key, flag.to_string()),
                None => Classification::Deferred,
            },
        },

        "src" | "image" | "source" => match value.as_str() {
            Some(text) if color::is_binding(text) => Classification::Deferred,
            // Network sources cannot be referenced statically; surface
            // them in the tools namespace for design-time preview only.
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Classification::Matched(quilt_core::attribute::Attribute::tools("src", url))
            }
            Some(name) if !name.is_empty() => {
                Classification::android("src", format!("@drawable/{}", resource_slug(name)))
            }
            _ => Classification::Deferred,
        },

        "tint" => match value.as_str() {
            Some(text) if color::is_binding(text) => Classification::Deferred,
            Some(text) => Classification::android("tint", color::resolve(text)),
            None => Classification::Deferred,
        },

        "elevation" | "shadow" => match binding_text(value) {
            Some(_) => Classification::Deferred,
            None => Classification::android("elevation", dimension::resolve(value)),
        },

        "contentMode" | "scaleType" => match value.as_str() {
            Some("fit") => Classification::android("scaleType", "fitCenter"),
            Some("fill") => Classification::android("scaleType", "centerCrop"),
            Some("center") => Classification::android("scaleType", "center"),
            Some(other) => Classification::android("scaleType", other),
            None => Classification::Deferred,
        },

        "safeArea" | "safeAreaEdges" => match value {
            Value::Array(items) => {
                let joined = pipe_join(items);
                if joined.is_empty() {
                    Classification::Deferred
                } else {
                    Classification::app("safeAreaEdges", joined)
                }
            }
            _ => match scalar_text(value) {
                Some(text) => Classification::app("safeAreaEdges", text),
                None => Classification::Deferred,
            },
        },

        _ => Classification::Deferred,
    }
}

/// Derives a drawable resource name from a local image name: lowercased
/// with non-alphanumerics replaced by underscores.
pub(crate) fn resource_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use quilt_core::{attribute::Namespace, component::ComponentKind};

    use super::*;

    fn ctx(drawable: bool) -> NodeContext {
        NodeContext {
            kind: ComponentKind::Container,
            parent: None,
            drawable,
        }
    }

    #[test]
    fn test_flat_background() {
        let attr = classify("background", &json!("red"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.name, "background");
        assert_eq!(attr.value, "#FF0000");
    }

    #[test]
    fn test_composer_owns_shape_keys() {
        assert_eq!(
            classify("cornerRadius", &json!(8), &ctx(true)),
            Classification::Suppressed
        );
        assert_eq!(
            classify("background", &json!("#FF0000"), &ctx(true)),
            Classification::Suppressed
        );
        assert_eq!(
            classify("pressedBackground", &json!("#EEEEEE"), &ctx(true)),
            Classification::Suppressed
        );
    }

    #[test]
    fn test_visibility_tokens() {
        let attr = classify("visibility", &json!("gone"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.value, "gone");
        let attr = classify("visibility", &json!("hidden"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.value, "gone");
    }

    #[test]
    fn test_visibility_binding_preserved() {
        let attr = classify("visibility", &json!("@{isVisible}"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.value, "@{isVisible}");
    }

    #[test]
    fn test_interaction_flags() {
        let attr = classify("clickable", &json!(true), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.value, "true");
        assert!(classify("clickable", &json!("@{canTap}"), &ctx(false)).is_deferred());
    }

    #[test]
    fn test_image_sources() {
        let attr = classify("src", &json!("https://cdn.example.com/a.png"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.namespace, Namespace::Tools);
        assert_eq!(attr.value, "https://cdn.example.com/a.png");

        let attr = classify("src", &json!("Hero Image-2"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.namespace, Namespace::Android);
        assert_eq!(attr.value, "@drawable/hero_image_2");
    }

    #[test]
    fn test_safe_area() {
        let attr = classify("safeArea", &json!(["top", "bottom"]), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.namespace, Namespace::App);
        assert_eq!(attr.value, "top|bottom");

        let attr = classify("safeArea", &json!("top"), &ctx(false))
            .into_matched()
            .unwrap();
        assert_eq!(attr.value, "top");
    }

    #[test]
    fn test_unknown_key_deferred() {
        assert!(classify("mystery", &json!(1), &ctx(false)).is_deferred());
    }
}
