//! Grammar and rewriting for data-binding expressions.
//!
//! A binding expression is a whole attribute value wrapped in `@{...}` or
//! `${...}`. The payload is tokenized with [`winnow`] and every embedded
//! identifier or property path is classified independently:
//!
//! - a method call (`format(count)`) is namespaced under `viewModel.`
//!   unless already prefixed,
//! - a property path (`user.name`) is assumed fully qualified and passes
//!   through,
//! - a bare identifier (`title`) is namespaced under `data.`.
//!
//! Operators, literals, and anything else are left untouched, so ternary
//! and template-literal payloads survive with only their identifiers
//! rewritten. `??`-style null-coalescing defaults are stripped from the
//! rewritten text while the bound variable is still extracted.

use indexmap::IndexSet;
use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, repeat},
    error::ModalResult,
    token::take_while,
};

/// Payload words that are never treated as bindable identifiers.
const KEYWORDS: &[&str] = &["true", "false", "null", "if", "else"];

/// The prefix for method-call rewrites.
const VIEW_MODEL_NS: &str = "viewModel.";

/// The prefix for bare-identifier rewrites.
const DATA_NS: &str = "data.";

/// Classification of a binding payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A single bare identifier (`@{title}`).
    Variable,
    /// A dotted property path (`@{user.name}`).
    PropertyPath,
    /// A method call (`@{save()}`).
    MethodCall,
    /// Anything more complex: ternaries, concatenation, templates.
    Expression,
}

/// A parsed and rewritten binding expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The payload classification.
    pub kind: BindingKind,
    /// The full expression in target syntax, e.g. `@{data.title}`.
    pub rewritten: String,
    /// Bound variables in source form, de-duplicated in first-seen order.
    pub variables: Vec<String>,
}

/// Parses an attribute value as a binding expression.
///
/// Returns `None` when the value is not a binding (no `@{`/`${` wrapper,
/// no closing brace, or an empty payload); such values are the caller's
/// to pass through unchanged.
///
/// # Examples
///
/// ```
/// use quilt_parser::{BindingKind, parse};
///
/// let binding = parse("@{title}").unwrap();
/// assert_eq!(binding.kind, BindingKind::Variable);
/// assert_eq!(binding.rewritten, "@{data.title}");
/// assert_eq!(binding.variables, vec!["title"]);
///
/// assert!(parse("plain text").is_none());
/// ```
pub fn parse(text: &str) -> Option<Binding> {
    let trimmed = text.trim();
    let payload = trimmed
        .strip_prefix("@{")
        .or_else(|| trimmed.strip_prefix("${"))?
        .strip_suffix('}')?
        .trim();
    if payload.is_empty() {
        trace!(text; "Empty binding payload");
        return None;
    }

    let mut variables = IndexSet::new();
    let (kept, default) = split_coalesce(payload);
    let rewritten_payload = rewrite_payload(kept.trim(), &mut variables);
    if let Some(default) = default {
        // The stripped default may itself bind a variable.
        rewrite_payload(default.trim(), &mut variables);
    }

    Some(Binding {
        kind: classify(payload),
        rewritten: format!("@{{{rewritten_payload}}}"),
        variables: variables.into_iter().collect(),
    })
}

/// Returns `true` if the value is a binding expression without parsing it.
pub fn is_binding(value: &str) -> bool {
    value.starts_with("@{") || value.starts_with("${")
}

fn classify(payload: &str) -> BindingKind {
    if is_identifier(payload) {
        BindingKind::Variable
    } else if is_property_path(payload) {
        BindingKind::PropertyPath
    } else if payload.contains('(') {
        BindingKind::MethodCall
    } else {
        BindingKind::Expression
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_property_path(text: &str) -> bool {
    text.contains('.') && text.split('.').all(is_identifier)
}

/// Splits a payload at a top-level `??`, returning the kept expression and
/// the stripped default. Quote and template-literal regions are opaque.
fn split_coalesce(payload: &str) -> (&str, Option<&str>) {
    let mut quote: Option<char> = None;
    let bytes = payload.as_bytes();
    for (i, c) in payload.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' | '`' => quote = Some(c),
                '?' if bytes.get(i + 1) == Some(&b'?') => {
                    return (&payload[..i], Some(&payload[i + 2..]));
                }
                _ => {}
            },
        }
    }
    (payload, None)
}

/// One lexical token of a binding payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// An identifier or dotted path; `call` is set when a `(` follows.
    Path { text: &'a str, call: bool },
    /// A quoted string literal, kept verbatim.
    Literal(&'a str),
    /// A backtick template literal, scanned for embedded `${...}`.
    Template(&'a str),
    /// Any other single character (operators, digits, whitespace).
    Other(&'a str),
}

fn ident_path<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        take_while(1..=1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.'
        }),
    )
        .take()
        .parse_next(input)
}

fn path_token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    let text = ident_path.parse_next(input)?;
    Ok(Token::Path {
        text,
        call: input.starts_with('('),
    })
}

fn string_literal<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((
        ('"', take_while(0.., |c: char| c != '"'), '"').take(),
        ('\'', take_while(0.., |c: char| c != '\''), '\'').take(),
    ))
    .map(Token::Literal)
    .parse_next(input)
}

fn template_literal<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    ('`', take_while(0.., |c: char| c != '`'), '`')
        .take()
        .map(Token::Template)
        .parse_next(input)
}

fn other<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    take_while(1..=1, |c: char| {
        !(c.is_ascii_alphabetic() || c == '_' || c == '"' || c == '\'' || c == '`')
    })
    .map(Token::Other)
    .parse_next(input)
}

fn token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((string_literal, template_literal, path_token, other)).parse_next(input)
}

fn rewrite_payload(payload: &str, variables: &mut IndexSet<String>) -> String {
    let tokens: Vec<Token<'_>> = match repeat(0.., token).parse(payload) {
        Ok(tokens) => tokens,
        Err(_) => {
            // Unlexable payloads pass through untouched.
            trace!(payload; "Binding payload left verbatim");
            return payload.to_string();
        }
    };

    let mut out = String::with_capacity(payload.len());
    for token in tokens {
        match token {
            Token::Path { text, call } => out.push_str(&rewrite_path(text, call, variables)),
            Token::Literal(text) | Token::Other(text) => out.push_str(text),
            Token::Template(raw) => out.push_str(&rewrite_template(raw, variables)),
        }
    }
    out
}

fn rewrite_path(text: &str, call: bool, variables: &mut IndexSet<String>) -> String {
    if KEYWORDS.contains(&text) {
        return text.to_string();
    }
    variables.insert(text.to_string());

    if call {
        if text.starts_with(VIEW_MODEL_NS) {
            text.to_string()
        } else {
            format!("{VIEW_MODEL_NS}{text}")
        }
    } else if text.contains('.') {
        text.to_string()
    } else {
        format!("{DATA_NS}{text}")
    }
}

/// Rewrites `${...}` segments inside a backtick template literal.
fn rewrite_template(raw: &str, variables: &mut IndexSet<String>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let inner = rewrite_payload(&after[..end], variables);
                out.push_str("${");
                out.push_str(&inner);
                out.push('}');
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated segment, keep verbatim.
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// De-duplicated accumulator of bound variables for one output file.
///
/// Each generated file gets its own registry; every parsed binding is
/// registered and the union of variables is available for the caller's
/// data-section emission.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    variables: IndexSet<String>,
}

impl BindingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records all variables of a parsed binding.
    pub fn register(&mut self, binding: &Binding) {
        for variable in &binding.variables {
            self.variables.insert(variable.clone());
        }
    }

    /// Iterates recorded variables in first-seen order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    /// Returns the number of distinct variables seen.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variables have been recorded.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
