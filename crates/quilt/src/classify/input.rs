//! Input classifier: keyboard, editing constraints, checked state,
//! selection lists, date bounds, and progress values.
//!
//! Event handler keys (`onValueChange`, `onTextChanged`, `onClick`,
//! `onTap`) are recognized but suppressed: a separate code-generation
//! stage wires them up, so emitting a flat attribute here would be wrong,
//! and deferring them would misreport them as unknown.

use serde_json::Value;

use quilt_core::{attribute::Classification, color, component::ComponentKind};

use super::{NodeContext, int_text, pipe_join, scalar_text};

/// Keys consumed by the event-wiring code path.
const EVENT_KEYS: &[&str] = &["onValueChange", "onTextChanged", "onClick", "onTap"];

pub(crate) fn classify(key: &str, value: &Value, ctx: &NodeContext) -> Classification {
    if EVENT_KEYS.contains(&key) {
        return Classification::Suppressed;
    }

    match key {
        "keyboardType" => match value.as_str() {
            Some(kind) => Classification::android("inputType", keyboard_input_type(kind)),
            None => Classification::Deferred,
        },

        "editable" => bool_attr("editable", value),
        "singleLine" => bool_attr("singleLine", value),

        "maxLength" => match int_text(value) {
            Some(length) => Classification::android("maxLength", length),
            None => Classification::Deferred,
        },

        // Checked state passes binding expressions through verbatim and
        // stringifies booleans otherwise.
        "checked" => match value {
            Value::String(text) if color::is_binding(text) => {
                Classification::android("checked", text.clone())
            }
            Value::Bool(flag) => Classification::android("checked", flag.to_string()),
            _ => Classification::Deferred,
        },

        "items" => match value {
            Value::Array(entries) => Classification::app("items", pipe_join(entries)),
            Value::String(text) if color::is_binding(text) => {
                // Only the select component can bind its item list; list
                // containers resolve their content elsewhere.
                if ctx.kind == ComponentKind::Select {
                    Classification::app("items", text.clone())
                } else {
                    Classification::Deferred
                }
            }
            _ => Classification::Deferred,
        },

        "minDate" | "maxDate" => match scalar_text(value) {
            Some(text) => Classification::android(key, text),
            None => Classification::Deferred,
        },
        "dateFormat" => match value.as_str() {
            Some(format) => Classification::app("dateFormat", format),
            None => Classification::Deferred,
        },

        "value" | "progress" => match int_text(value) {
            Some(progress) => Classification::android("progress", progress),
            None => Classification::Deferred,
        },
        "min" => match int_text(value) {
            Some(min) => Classification::android("min", min),
            None => Classification::Deferred,
        },
        "max" => match int_text(value) {
            Some(max) => Classification::android("max", max),
            None => Classification::Deferred,
        },

        _ => Classification::Deferred,
    }
}

fn bool_attr(name: &'static str, value: &Value) -> Classification {
    match value.as_bool() {
        Some(flag) => Classification::android(name, flag.to_string()),
        None => Classification::Deferred,
    }
}

/// Maps the keyboard vocabulary onto `android:inputType` values.
/// Unrecognized kinds pass through unchanged.
fn keyboard_input_type(kind: &str) -> String {
    match kind {
        "text" => "text",
        "number" => "number",
        "decimal" => "numberDecimal",
        "phone" => "phone",
        "email" => "textEmailAddress",
        "password" => "textPassword",
        "url" => "textUri",
        other => other,
    }
    .to_string()
}
