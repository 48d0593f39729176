//! Drawable XML serialization: shape, selector, and ripple documents.

use quilt_core::attribute::Namespace;

use super::{INDENT, XML_HEADER, escape};
use crate::drawable::{DrawableSpec, ShapeSpec};

/// Renders a drawable spec as its own XML document.
pub fn render_drawable(spec: &DrawableSpec) -> String {
    let mut out = String::new();
    out.push_str(XML_HEADER);
    out.push('\n');
    match spec {
        DrawableSpec::Shape(shape) => write_shape(&mut out, shape, 0, true),
        DrawableSpec::StateList(entries) => {
            out.push_str(&format!(
                "<selector xmlns:android=\"{}\">\n",
                Namespace::Android.uri()
            ));
            for (state, shape) in entries {
                match state {
                    Some(state) => {
                        let (name, value) = state.selector_attr();
                        out.push_str(&format!("{INDENT}<item android:{name}=\"{value}\">\n"));
                    }
                    None => out.push_str(&format!("{INDENT}<item>\n")),
                }
                write_shape(&mut out, shape, 2, false);
                out.push_str(&format!("{INDENT}</item>\n"));
            }
            out.push_str("</selector>\n");
        }
        DrawableSpec::Ripple {
            color,
            content,
            mask,
        } => {
            out.push_str(&format!(
                "<ripple xmlns:android=\"{}\"\n{INDENT}android:color=\"{}\"",
                Namespace::Android.uri(),
                escape(color)
            ));
            if content.is_none() && mask.is_none() {
                out.push_str(" />\n");
                return out;
            }
            out.push_str(">\n");
            if let Some(shape) = content {
                out.push_str(&format!("{INDENT}<item>\n"));
                write_shape(&mut out, shape, 2, false);
                out.push_str(&format!("{INDENT}</item>\n"));
            }
            if let Some(shape) = mask {
                out.push_str(&format!("{INDENT}<item android:id=\"@android:id/mask\">\n"));
                write_shape(&mut out, shape, 2, false);
                out.push_str(&format!("{INDENT}</item>\n"));
            }
            out.push_str("</ripple>\n");
        }
    }
    out
}

fn write_shape(out: &mut String, shape: &ShapeSpec, depth: usize, root: bool) {
    let pad = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    let form = if shape.oval { "oval" } else { "rectangle" };

    out.push_str(&pad);
    if root {
        out.push_str(&format!(
            "<shape xmlns:android=\"{}\"\n{inner}android:shape=\"{form}\">\n",
            Namespace::Android.uri()
        ));
    } else {
        out.push_str(&format!("<shape android:shape=\"{form}\">\n"));
    }

    if let Some(radius) = &shape.corner_radius {
        out.push_str(&format!(
            "{inner}<corners android:radius=\"{}\" />\n",
            escape(radius)
        ));
    }
    if shape.border_width.is_some() || shape.border_color.is_some() {
        let width = shape.border_width.as_deref().unwrap_or("1dp");
        let color = shape.border_color.as_deref().unwrap_or("#000000");
        out.push_str(&format!(
            "{inner}<stroke\n{inner}{INDENT}android:width=\"{}\"\n{inner}{INDENT}android:color=\"{}\" />\n",
            escape(width),
            escape(color)
        ));
    }
    if let Some(gradient) = &shape.gradient {
        out.push_str(&format!(
            "{inner}<gradient\n\
             {inner}{INDENT}android:type=\"{}\"\n\
             {inner}{INDENT}android:angle=\"{}\"\n\
             {inner}{INDENT}android:startColor=\"{}\"\n\
             {inner}{INDENT}android:endColor=\"{}\" />\n",
            gradient.kind.as_str(),
            gradient.angle,
            escape(&gradient.start_color),
            escape(&gradient.end_color)
        ));
    } else if let Some(fill) = &shape.fill {
        out.push_str(&format!(
            "{inner}<solid android:color=\"{}\" />\n",
            escape(fill)
        ));
    }

    out.push_str(&format!("{pad}</shape>\n"));
}
