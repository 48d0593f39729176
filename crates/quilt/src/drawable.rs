//! Drawable composition for shaped, stateful, and feedback backgrounds.
//!
//! A flat color attribute cannot express corner radii, borders, gradients,
//! per-interaction-state fills, or touch feedback; those need a separate
//! drawable resource file. [`needs_drawable`] decides whether a node's
//! style attributes exceed the flat form, and [`compose`] builds the
//! structured [`DrawableSpec`] that the export layer serializes.

use serde_json::{Map, Value};

use quilt_core::{
    color::{self, Rgba},
    component::ComponentKind,
    dimension,
};

use crate::resources::ColorTable;

/// Fallback feedback color when no ripple hint or theme token applies.
const DEFAULT_FEEDBACK_COLOR: &str = "#1F000000";

/// Theme token for touch feedback on inherently interactive components.
const THEME_HIGHLIGHT: &str = "?attr/colorControlHighlight";

/// Shape-defining attribute keys.
const SHAPE_KEYS: &[&str] = &["cornerRadius", "borderWidth", "borderColor", "gradient"];

/// Per-interaction-state background keys, in state-list precedence order:
/// disabled > pressed > selected > focused > checked.
const STATE_KEYS: &[(&str, InteractionState)] = &[
    ("disabledBackground", InteractionState::Disabled),
    ("pressedBackground", InteractionState::Pressed),
    ("selectedBackground", InteractionState::Selected),
    ("focusedBackground", InteractionState::Focused),
    ("checkedBackground", InteractionState::Checked),
];

/// One interaction state of a state-list drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Disabled,
    Pressed,
    Selected,
    Focused,
    Checked,
}

impl InteractionState {
    /// Returns the selector attribute name and value for this state.
    pub fn selector_attr(&self) -> (&'static str, &'static str) {
        match self {
            Self::Disabled => ("state_enabled", "false"),
            Self::Pressed => ("state_pressed", "true"),
            Self::Selected => ("state_selected", "true"),
            Self::Focused => ("state_focused", "true"),
            Self::Checked => ("state_checked", "true"),
        }
    }
}

/// Gradient fill type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Sweep,
}

impl GradientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Sweep => "sweep",
        }
    }
}

/// A gradient fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    /// Gradient angle in degrees (Android convention: 0 is left-to-right,
    /// counter-clockwise).
    pub angle: i64,
    pub start_color: String,
    pub end_color: String,
}

/// A single shape: optional corners, border, fill, and gradient.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeSpec {
    pub corner_radius: Option<String>,
    pub border_width: Option<String>,
    pub border_color: Option<String>,
    pub fill: Option<String>,
    pub gradient: Option<GradientSpec>,
    /// Oval instead of (rounded) rectangle; used for circular masks.
    pub oval: bool,
}

impl ShapeSpec {
    /// Returns `true` when no shape property is set.
    pub fn is_empty(&self) -> bool {
        self.corner_radius.is_none()
            && self.border_width.is_none()
            && self.border_color.is_none()
            && self.fill.is_none()
            && self.gradient.is_none()
    }

    fn with_fill(&self, fill: String) -> Self {
        Self {
            fill: Some(fill),
            gradient: None,
            ..self.clone()
        }
    }
}

/// A structured background description requiring its own resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawableSpec {
    /// A single shape.
    Shape(ShapeSpec),
    /// Per-interaction-state shapes in precedence order; `None` is the
    /// default state and always comes last.
    StateList(Vec<(Option<InteractionState>, ShapeSpec)>),
    /// Touch feedback. Without content or mask the feedback is borderless.
    Ripple {
        color: String,
        /// Drawn content (the node's opaque background), bounding the
        /// feedback.
        content: Option<ShapeSpec>,
        /// Invisible bounds layer for icon-like components without an
        /// opaque background.
        mask: Option<ShapeSpec>,
    },
}

/// Returns `true` if the node's attributes require a composed drawable
/// rather than a flat background attribute.
pub fn needs_drawable(attrs: &Map<String, Value>, kind: ComponentKind) -> bool {
    if SHAPE_KEYS.iter().any(|key| attrs.contains_key(*key)) {
        return true;
    }
    if STATE_KEYS.iter().any(|(key, _)| attrs.contains_key(*key)) {
        return true;
    }
    if kind.is_interactive() {
        return true;
    }
    let has_click = attrs.contains_key("onClick") || attrs.contains_key("onTap");
    has_click && shows_feedback(kind)
}

/// Types that conventionally show touch feedback when given a click
/// handler.
fn shows_feedback(kind: ComponentKind) -> bool {
    kind.is_interactive()
        || matches!(
            kind,
            ComponentKind::Image | ComponentKind::Container | ComponentKind::ZStack
        )
}

/// Composes the drawable spec for a node's attributes.
///
/// `colors` is the batch's color table: extraction runs before
/// composition and may have rewritten color literals to `@color/` keys,
/// which the opacity test resolves back through the table.
///
/// Returns `None` when nothing about the node requires a drawable; this is
/// not an error.
pub fn compose(
    attrs: &Map<String, Value>,
    kind: ComponentKind,
    colors: &ColorTable,
) -> Option<DrawableSpec> {
    let base = base_shape(attrs);

    let mut states: Vec<(Option<InteractionState>, ShapeSpec)> = Vec::new();
    for (key, state) in STATE_KEYS {
        if let Some(fill) = color_value(attrs.get(*key)) {
            states.push((Some(*state), base.with_fill(fill)));
        }
    }
    if !states.is_empty() {
        // The default state falls back to transparent when no base
        // background was given.
        let default_fill = base
            .fill
            .clone()
            .unwrap_or_else(|| color::TRANSPARENT.to_string());
        let mut default = base.with_fill(default_fill);
        default.gradient = base.gradient.clone();
        states.push((None, default));
        return Some(DrawableSpec::StateList(states));
    }

    if !base.is_empty() && SHAPE_KEYS.iter().any(|key| attrs.contains_key(*key)) {
        return Some(DrawableSpec::Shape(base));
    }

    if kind.is_interactive() || needs_drawable(attrs, kind) {
        return Some(compose_ripple(attrs, kind, &base, colors));
    }

    None
}

fn compose_ripple(
    attrs: &Map<String, Value>,
    kind: ComponentKind,
    base: &ShapeSpec,
    colors: &ColorTable,
) -> DrawableSpec {
    let color = color_value(attrs.get("rippleColor"))
        .or_else(|| color_value(attrs.get("tapBackground")))
        .unwrap_or_else(|| {
            if kind.is_interactive() {
                THEME_HIGHLIGHT.to_string()
            } else {
                DEFAULT_FEEDBACK_COLOR.to_string()
            }
        });

    let opaque_fill = base
        .fill
        .as_deref()
        .filter(|fill| fill_rgba(fill, colors).is_some_and(|c| c.a == 0xFF));

    if let Some(fill) = opaque_fill {
        // An opaque background bounds the feedback itself.
        return DrawableSpec::Ripple {
            color,
            content: Some(base.with_fill(fill.to_string())),
            mask: None,
        };
    }

    if kind.is_icon_like() {
        // Icon-like interactive components get an explicit bounds mask:
        // rounded to the node's corner radius, circular otherwise.
        let mask = ShapeSpec {
            corner_radius: base.corner_radius.clone(),
            fill: Some("#FFFFFF".to_string()),
            oval: base.corner_radius.is_none(),
            ..ShapeSpec::default()
        };
        return DrawableSpec::Ripple {
            color,
            content: None,
            mask: Some(mask),
        };
    }

    DrawableSpec::Ripple {
        color,
        content: None,
        mask: None,
    }
}

fn base_shape(attrs: &Map<String, Value>) -> ShapeSpec {
    ShapeSpec {
        corner_radius: attrs.get("cornerRadius").map(dimension::resolve),
        border_width: attrs.get("borderWidth").map(dimension::resolve),
        border_color: color_value(attrs.get("borderColor")),
        fill: color_value(attrs.get("background")),
        gradient: attrs.get("gradient").and_then(gradient_spec),
        oval: false,
    }
}

/// Parses a fill to its color components. A `@color/` reference is looked
/// up in the table (extraction rewrites literals before composition runs);
/// anything else parses directly.
fn fill_rgba(fill: &str, colors: &ColorTable) -> Option<Rgba> {
    match fill.strip_prefix("@color/") {
        Some(key) => colors.get(key).and_then(Rgba::parse),
        None => Rgba::parse(fill),
    }
}

/// Resolves an attribute value to a canonical color, skipping binding
/// expressions and non-strings.
fn color_value(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?;
    if color::is_binding(text) {
        return None;
    }
    Some(color::resolve(text))
}

fn gradient_spec(value: &Value) -> Option<GradientSpec> {
    let obj = value.as_object()?;
    let colors = obj.get("colors")?.as_array()?;
    let start_color = color_value(colors.first())?;
    let end_color = color_value(colors.get(1)).unwrap_or_else(|| start_color.clone());

    // Unrecognized gradient types default to linear.
    let kind = match obj.get("type").and_then(Value::as_str) {
        Some("radial") => GradientKind::Radial,
        Some("sweep") => GradientKind::Sweep,
        _ => GradientKind::Linear,
    };

    // An explicit angle wins; otherwise the direction vocabulary applies,
    // defaulting to top-to-bottom.
    let angle = match obj.get("angle").and_then(Value::as_i64) {
        Some(angle) => angle,
        None => match obj.get("direction").and_then(Value::as_str) {
            Some("bottomToTop") => 90,
            Some("leftToRight") => 0,
            Some("rightToLeft") => 180,
            _ => 270,
        },
    };

    Some(GradientSpec {
        kind,
        angle,
        start_color,
        end_color,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test attrs must be an object"),
        }
    }

    #[test]
    fn test_plain_shape_spec() {
        let attrs = attrs(json!({"background": "#FF0000", "cornerRadius": 8}));
        let spec = compose(&attrs, ComponentKind::Container, &ColorTable::new()).unwrap();
        match spec {
            DrawableSpec::Shape(shape) => {
                assert_eq!(shape.fill.as_deref(), Some("#FF0000"));
                assert_eq!(shape.corner_radius.as_deref(), Some("8dp"));
                assert!(shape.gradient.is_none());
            }
            other => panic!("expected shape spec, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_background_is_not_a_drawable() {
        let attrs = attrs(json!({"background": "#FF0000"}));
        assert!(!needs_drawable(&attrs, ComponentKind::Container));
        assert!(compose(&attrs, ComponentKind::Container, &ColorTable::new()).is_none());
    }

    #[test]
    fn test_state_list_precedence_and_default() {
        let attrs = attrs(json!({
            "background": "#FFFFFF",
            "pressedBackground": "#CCCCCC",
            "disabledBackground": "#EEEEEE"
        }));
        let spec = compose(&attrs, ComponentKind::Button, &ColorTable::new()).unwrap();
        match spec {
            DrawableSpec::StateList(entries) => {
                let states: Vec<_> = entries.iter().map(|(s, _)| *s).collect();
                assert_eq!(
                    states,
                    vec![
                        Some(InteractionState::Disabled),
                        Some(InteractionState::Pressed),
                        None
                    ]
                );
                let (_, default) = entries.last().unwrap();
                assert_eq!(default.fill.as_deref(), Some("#FFFFFF"));
            }
            other => panic!("expected state list, got {other:?}"),
        }
    }

    #[test]
    fn test_state_list_default_falls_back_to_transparent() {
        let attrs = attrs(json!({"pressedBackground": "#CCCCCC"}));
        let spec = compose(&attrs, ComponentKind::Container, &ColorTable::new()).unwrap();
        match spec {
            DrawableSpec::StateList(entries) => {
                let (state, default) = entries.last().unwrap();
                assert!(state.is_none());
                assert_eq!(default.fill.as_deref(), Some(color::TRANSPARENT));
            }
            other => panic!("expected state list, got {other:?}"),
        }
    }

    #[test]
    fn test_interactive_ripple_theme_token() {
        let attrs = Map::new();
        let spec = compose(&attrs, ComponentKind::Button, &ColorTable::new()).unwrap();
        match spec {
            DrawableSpec::Ripple {
                color,
                content,
                mask,
            } => {
                assert_eq!(color, THEME_HIGHLIGHT);
                assert!(content.is_none());
                assert!(mask.is_none());
            }
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_ripple_color_chain() {
        let hinted = attrs(json!({"rippleColor": "#80FFFFFF"}));
        match compose(&hinted, ComponentKind::Button, &ColorTable::new()).unwrap() {
            DrawableSpec::Ripple { color, .. } => assert_eq!(color, "#80FFFFFF"),
            other => panic!("expected ripple, got {other:?}"),
        }

        let tapped = attrs(json!({"tapBackground": "gray"}));
        match compose(&tapped, ComponentKind::Button, &ColorTable::new()).unwrap() {
            DrawableSpec::Ripple { color, .. } => assert_eq!(color, "#808080"),
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_clicked_image_gets_default_feedback() {
        let attrs = attrs(json!({"onClick": "@{open()}"}));
        assert!(needs_drawable(&attrs, ComponentKind::Image));
        match compose(&attrs, ComponentKind::Image, &ColorTable::new()).unwrap() {
            DrawableSpec::Ripple { color, .. } => assert_eq!(color, DEFAULT_FEEDBACK_COLOR),
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_opaque_background_bounds_ripple() {
        let attrs = attrs(json!({"background": "#FF0000", "onClick": "@{tap()}"}));
        match compose(&attrs, ComponentKind::Card, &ColorTable::new()).unwrap() {
            DrawableSpec::Ripple { content, mask, .. } => {
                assert_eq!(content.unwrap().fill.as_deref(), Some("#FF0000"));
                assert!(mask.is_none());
            }
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_extracted_background_ref_bounds_ripple() {
        let mut colors = ColorTable::new();
        colors.extract("#FF0000");

        let attrs = attrs(json!({"background": "@color/red", "onClick": "@{tap()}"}));
        match compose(&attrs, ComponentKind::Card, &colors).unwrap() {
            DrawableSpec::Ripple { content, mask, .. } => {
                assert_eq!(content.unwrap().fill.as_deref(), Some("@color/red"));
                assert!(mask.is_none());
            }
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_icon_button_mask() {
        let attrs = Map::new();
        match compose(&attrs, ComponentKind::IconButton, &ColorTable::new()).unwrap() {
            DrawableSpec::Ripple { mask, content, .. } => {
                assert!(content.is_none());
                let mask = mask.unwrap();
                assert!(mask.oval);
                assert_eq!(mask.fill.as_deref(), Some("#FFFFFF"));
            }
            other => panic!("expected ripple, got {other:?}"),
        }
    }

    #[test]
    fn test_gradient_defaults() {
        let attrs = attrs(json!({"gradient": {"colors": ["#FF0000", "#0000FF"]}}));
        match compose(&attrs, ComponentKind::Container, &ColorTable::new()).unwrap() {
            DrawableSpec::Shape(shape) => {
                let gradient = shape.gradient.unwrap();
                assert_eq!(gradient.kind, GradientKind::Linear);
                assert_eq!(gradient.angle, 270);
                assert_eq!(gradient.start_color, "#FF0000");
                assert_eq!(gradient.end_color, "#0000FF");
            }
            other => panic!("expected shape, got {other:?}"),
        }
    }

    #[test]
    fn test_gradient_direction_vocabulary() {
        let attrs = attrs(json!({
            "gradient": {"colors": ["#000000", "#FFFFFF"], "direction": "leftToRight", "type": "sweep"}
        }));
        match compose(&attrs, ComponentKind::Container, &ColorTable::new()).unwrap() {
            DrawableSpec::Shape(shape) => {
                let gradient = shape.gradient.unwrap();
                assert_eq!(gradient.kind, GradientKind::Sweep);
                assert_eq!(gradient.angle, 0);
            }
            other => panic!("expected shape, got {other:?}"),
        }
    }

    #[test]
    fn test_binding_backgrounds_never_composed() {
        let attrs = attrs(json!({"background": "@{bg}", "cornerRadius": 4}));
        match compose(&attrs, ComponentKind::Container, &ColorTable::new()).unwrap() {
            DrawableSpec::Shape(shape) => assert!(shape.fill.is_none()),
            other => panic!("expected shape, got {other:?}"),
        }
    }
}
