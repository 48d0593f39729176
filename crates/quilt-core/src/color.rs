//! Color handling for Quilt layouts.
//!
//! This module canonicalizes color literals from layout documents into the
//! hex form the generated resources use, and provides the [`Rgba`] type
//! whose hue/brightness heuristics drive color resource key naming.
//!
//! Resolution is pure and idempotent: binding expressions and resource
//! references pass through untouched, and any canonical output fed back in
//! comes out unchanged.

use std::fmt;

/// Canonical fully-transparent color.
pub const TRANSPARENT: &str = "#00000000";

/// Fixed lookup table of recognized color names.
///
/// Unknown names are deliberately not an error: they pass through
/// [`resolve`] unchanged and are treated as external resource names. A
/// literal that is both a valid name here and an intended resource key
/// resolves through this table; callers wanting the resource must use an
/// explicit `@color/` reference.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#00FF00"),
    ("blue", "#0000FF"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("pink", "#FFC0CB"),
    ("brown", "#A52A2A"),
    ("silver", "#C0C0C0"),
    ("teal", "#008080"),
    ("navy", "#000080"),
];

/// Returns `true` if the value is a data-binding expression.
///
/// Binding expressions are never resolved at generation time.
pub fn is_binding(value: &str) -> bool {
    value.starts_with("@{") || value.starts_with("${")
}

/// Returns `true` if the value is a resource or theme-attribute reference
/// (`@color/primary`, `?attr/colorAccent`).
pub fn is_reference(value: &str) -> bool {
    (value.starts_with('@') && !is_binding(value)) || value.starts_with('?')
}

/// Canonicalizes a color literal.
///
/// - Binding expressions and resource references pass through unchanged.
/// - `transparent` / `clear` become the canonical 8-digit [`TRANSPARENT`].
/// - Hex values gain a `#` prefix if missing; 3-digit shorthand expands by
///   nibble duplication (`F00` → `#FF0000`); 6- and 8-digit forms are
///   uppercased. 8-digit values keep their alpha-first channel order.
/// - Recognized names resolve through [`NAMED_COLORS`].
/// - Anything else passes through unchanged, assumed to be an external
///   resource name.
///
/// # Examples
///
/// ```
/// use quilt_core::color::resolve;
///
/// assert_eq!(resolve("f00"), "#FF0000");
/// assert_eq!(resolve("black"), "#000000");
/// assert_eq!(resolve("@{themeColor}"), "@{themeColor}");
/// ```
pub fn resolve(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_binding(trimmed) || is_reference(trimmed) {
        return value.to_string();
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "transparent" | "clear" => return TRANSPARENT.to_string(),
        _ => {}
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.chars().all(|c| c.is_ascii_hexdigit()) {
        match digits.len() {
            3 => {
                let mut expanded = String::with_capacity(7);
                expanded.push('#');
                for c in digits.chars() {
                    let c = c.to_ascii_uppercase();
                    expanded.push(c);
                    expanded.push(c);
                }
                return expanded;
            }
            6 | 8 => return format!("#{}", digits.to_ascii_uppercase()),
            _ => {}
        }
    }

    for (name, hex) in NAMED_COLORS {
        if name.eq_ignore_ascii_case(trimmed) {
            return (*hex).to_string();
        }
    }

    value.to_string()
}

/// An RGBA color parsed from a canonical hex literal.
///
/// Used by the resource extraction engine to derive human-readable base
/// names for minted color keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Parses a hex color literal (`#RGB`, `#RRGGBB`, or alpha-first
    /// `#AARRGGBB`, with or without the `#`). Returns `None` for anything
    /// else, including binding expressions and resource references.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if is_binding(trimmed) || is_reference(trimmed) {
            return None;
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let nibble = |c: char| {
                    let d = c.to_digit(16)? as u8;
                    Some(d << 4 | d)
                };
                let mut chars = digits.chars();
                Some(Self {
                    r: nibble(chars.next()?)?,
                    g: nibble(chars.next()?)?,
                    b: nibble(chars.next()?)?,
                    a: 0xFF,
                })
            }
            6 => Some(Self {
                r: byte(&digits[0..2])?,
                g: byte(&digits[2..4])?,
                b: byte(&digits[4..6])?,
                a: 0xFF,
            }),
            8 => Some(Self {
                a: byte(&digits[0..2])?,
                r: byte(&digits[2..4])?,
                g: byte(&digits[4..6])?,
                b: byte(&digits[6..8])?,
            }),
            _ => None,
        }
    }

    /// Derives a human-readable base name for this color.
    ///
    /// Near-white and near-black are named directly; low-saturation colors
    /// become `gray`; everything else is named by hue sector. The result is
    /// a base key for the color resource table, with collision suffixes
    /// applied by the caller.
    pub fn base_name(&self) -> &'static str {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        if min >= 0xF0 {
            return "white";
        }
        if max <= 0x28 {
            return "black";
        }
        if max - min <= 0x18 {
            return "gray";
        }

        match self.hue_degrees() {
            h if h < 15.0 || h >= 345.0 => "red",
            h if h < 45.0 => "orange",
            h if h < 70.0 => "yellow",
            h if h < 170.0 => "green",
            h if h < 200.0 => "cyan",
            h if h < 260.0 => "blue",
            h if h < 290.0 => "purple",
            _ => "pink",
        }
    }

    fn hue_degrees(&self) -> f64 {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= f64::EPSILON {
            return 0.0;
        }

        let hue = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue * 60.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}
