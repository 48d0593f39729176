//! The persistent color table.
//!
//! Unlike strings, color keys live in one flat namespace: the same hex
//! value appearing in any layout file reuses one key. Base names come from
//! the hue/brightness heuristics in [`quilt_core::color::Rgba`], with the
//! same numeric collision suffixing as string keys.

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use quilt_core::color::{self, Rgba};

/// Flat color resources keyed by generated name.
#[derive(Debug, Default)]
pub struct ColorTable {
    entries: IndexMap<String, String>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a previously persisted JSON value.
    pub fn from_value(value: Option<Value>) -> Self {
        let Some(Value::Object(map)) = value else {
            if let Some(other) = value {
                warn!(value:? = other; "Color table is not an object; starting empty");
            }
            return Self::default();
        };

        let mut entries = IndexMap::new();
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(key, text);
                }
                other => {
                    warn!(key, value:? = other; "Dropping non-string color entry");
                }
            }
        }
        Self { entries }
    }

    /// Serializes the table for persistence.
    pub fn to_value(&self) -> Value {
        let map: serde_json::Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }

    /// Extracts a color literal and returns its symbolic key.
    ///
    /// Returns `None` for bindings, resource references, theme tokens, and
    /// anything else that does not canonicalize to a parseable hex value.
    pub fn extract(&mut self, literal: &str) -> Option<String> {
        if color::is_binding(literal) || color::is_reference(literal) {
            return None;
        }
        let canonical = color::resolve(literal);
        let rgba = Rgba::parse(&canonical)?;

        // Identical values reuse their key, wherever they first appeared.
        if let Some((key, _)) = self
            .entries
            .iter()
            .find(|(_, value)| value.as_str() == canonical)
        {
            return Some(key.clone());
        }

        let key = super::strings::free_key(&self.entries, &rgba.base_name());
        debug!(key, value = canonical; "Minted color key");
        self.entries.insert(key.clone(), canonical);
        Some(key)
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_mints_hue_named_key() {
        let mut table = ColorTable::new();
        assert_eq!(table.extract("#FF0000").unwrap(), "red");
        assert_eq!(table.get("red"), Some("#FF0000"));
    }

    #[test]
    fn test_identical_values_reuse_key() {
        let mut table = ColorTable::new();
        let first = table.extract("#FF0000").unwrap();
        let second = table.extract("ff0000").unwrap();
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_near_black_collision_suffix() {
        let mut table = ColorTable::new();
        assert_eq!(table.extract("#000000").unwrap(), "black");
        assert_eq!(table.extract("#010101").unwrap(), "black_2");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_bindings_and_references_pass() {
        let mut table = ColorTable::new();
        assert!(table.extract("@{accent}").is_none());
        assert!(table.extract("@color/primary").is_none());
        assert!(table.extract("?attr/colorPrimary").is_none());
        assert!(table.extract("brandBlue").is_none());
    }

    #[test]
    fn test_persisted_keys_win() {
        let mut table = ColorTable::from_value(Some(json!({"ink": "#000000"})));
        assert_eq!(table.extract("#000000").unwrap(), "ink");
        assert_eq!(table.len(), 1);
    }
}
