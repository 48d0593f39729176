//! Dimension resolution for layout attribute values.
//!
//! This module provides the [`Dimension`] type which classifies a JSON
//! attribute value (number, keyword, suffixed string, percentage, array)
//! into a density-independent dimension token for the generated layout.
//!
//! # Examples
//!
//! ```
//! use quilt_core::dimension::Dimension;
//! use serde_json::json;
//!
//! assert_eq!(Dimension::from_value(&json!(16)).to_string(), "16dp");
//! assert_eq!(Dimension::from_value(&json!("matchParent")).to_string(), "match_parent");
//! assert_eq!(Dimension::from_value(&json!("50%")).to_string(), "0dp");
//! ```

use std::fmt;

use serde_json::Value;

/// The density-independent unit suffix used for numeric dimensions.
pub const UNIT: &str = "dp";

/// A resolved dimension value.
///
/// Each variant renders to exactly one output token via [`fmt::Display`].
/// Percentage values render as the `0dp` placeholder token; the percentage
/// itself stays available through [`Dimension::percent`] so a caller can
/// apply a proportional-weight mechanism instead of an absolute size.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Fill the parent along this axis (`matchParent` / `match_parent`).
    MatchParent,
    /// Size to content along this axis (`wrapContent` / `wrap_content`).
    WrapContent,
    /// An absolute size in density-independent pixels. Fractional input is
    /// truncated toward zero (`8.9` resolves to `8dp`). Negative values are
    /// preserved; rejecting or reinterpreting them is a caller concern.
    Dp(i64),
    /// A percentage of the parent (`"50%"`). Renders as `0dp`.
    Percent(f64),
    /// An already-suffixed dimension string (`"16dp"`, `"12sp"`), passed
    /// through unchanged.
    Literal(String),
    /// Fallback for null, missing, or unrecognized values. Renders as `0dp`.
    Zero,
}

impl Dimension {
    /// Resolves a JSON attribute value to a [`Dimension`].
    ///
    /// Arrays collapse to their first element; an empty array, `null`, or
    /// any other unexpected shape resolves to [`Dimension::Zero`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Dp(f.trunc() as i64),
                None => Self::Zero,
            },
            Value::String(s) => Self::from_text(s),
            Value::Array(items) => match items.first() {
                Some(first) => Self::from_value(first),
                None => Self::Zero,
            },
            _ => Self::Zero,
        }
    }

    /// Resolves a string attribute value to a [`Dimension`].
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed {
            "" => return Self::Zero,
            "matchParent" | "match_parent" => return Self::MatchParent,
            "wrapContent" | "wrap_content" => return Self::WrapContent,
            _ => {}
        }

        if let Some(percent) = trimmed.strip_suffix('%') {
            if let Ok(value) = percent.trim().parse::<f64>() {
                return Self::Percent(value);
            }
        }

        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Dp(value.trunc() as i64);
        }

        // Anything else ("16dp", "12sp") is treated as already suffixed.
        Self::Literal(trimmed.to_string())
    }

    /// Returns the percentage value for [`Dimension::Percent`], else `None`.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Percent(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchParent => write!(f, "match_parent"),
            Self::WrapContent => write!(f, "wrap_content"),
            Self::Dp(value) => write!(f, "{value}{UNIT}"),
            // Percentage sizing has no absolute token; the layout stage is
            // expected to translate it into a weight where the parent
            // supports one.
            Self::Percent(_) => write!(f, "0{UNIT}"),
            Self::Literal(text) => write!(f, "{text}"),
            Self::Zero => write!(f, "0{UNIT}"),
        }
    }
}

/// Resolves a JSON attribute value directly to its dimension token.
///
/// Convenience wrapper over [`Dimension::from_value`] for callers that only
/// need the rendered token.
pub fn resolve(value: &Value) -> String {
    Dimension::from_value(value).to_string()
}
