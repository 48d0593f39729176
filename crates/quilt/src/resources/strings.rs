//! The persistent string table.
//!
//! Keys are namespaced by source-file prefix: the on-disk shape is
//! `{fileprefix: {key: value}}` and the key handed back to callers is the
//! joined `fileprefix_key` form.

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

/// Minted keys are truncated to this length before collision suffixing.
const MAX_KEY_LEN: usize = 30;

/// String resources, partitioned by source-file prefix.
#[derive(Debug, Default)]
pub struct StringTable {
    entries: IndexMap<String, IndexMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a previously persisted JSON value. Entries with
    /// unexpected shapes are dropped with a warning.
    pub fn from_value(value: Option<Value>) -> Self {
        let Some(Value::Object(map)) = value else {
            if let Some(other) = value {
                warn!(value:? = other; "String table is not an object; starting empty");
            }
            return Self::default();
        };

        let mut entries = IndexMap::new();
        for (prefix, section) in map {
            let Value::Object(section) = section else {
                warn!(prefix; "Dropping non-object string table section");
                continue;
            };
            let mut keys = IndexMap::new();
            for (key, value) in section {
                match value {
                    Value::String(text) => {
                        keys.insert(key, text);
                    }
                    other => {
                        warn!(prefix, key, value:? = other; "Dropping non-string table entry");
                    }
                }
            }
            entries.insert(prefix, keys);
        }
        Self { entries }
    }

    /// Serializes the table for persistence.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (prefix, section) in &self.entries {
            let section: serde_json::Map<String, Value> = section
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            map.insert(prefix.clone(), Value::Object(section));
        }
        Value::Object(map)
    }

    /// Extracts a literal into the given file prefix's namespace and
    /// returns the full `prefix_key` symbolic key.
    ///
    /// Returns `None` when the value is not extractable: binding
    /// expressions, resource references, values that already look like a
    /// resolved key of this prefix, and short or non-alphabetic values all
    /// pass through untouched.
    pub fn extract(&mut self, prefix: &str, text: &str) -> Option<String> {
        if !self.is_extractable(prefix, text) {
            return None;
        }

        // Re-extracting a known literal returns the existing key.
        if let Some(section) = self.entries.get(prefix) {
            if let Some((key, _)) = section.iter().find(|(_, value)| value.as_str() == text) {
                return Some(format!("{prefix}_{key}"));
            }
        }

        let base = normalize_key(text);
        if base.is_empty() {
            return None;
        }

        let section = self.entries.entry(prefix.to_string()).or_default();
        let key = free_key(section, &base);
        debug!(prefix, key, text; "Minted string key");
        section.insert(key.clone(), text.to_string());
        Some(format!("{prefix}_{key}"))
    }

    /// Looks up a value by prefix and local key.
    pub fn get(&self, prefix: &str, key: &str) -> Option<&str> {
        self.entries.get(prefix)?.get(key).map(String::as_str)
    }

    /// Total entry count across all prefixes.
    pub fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_extractable(&self, prefix: &str, text: &str) -> bool {
        if text.starts_with("@{") || text.starts_with("${") || text.starts_with("@string/") {
            return false;
        }
        // A pure snake_case value matching a known `prefix_key` is already
        // a resolved key.
        if is_snake_case(text) {
            let local = text.strip_prefix(prefix).and_then(|s| s.strip_prefix('_'));
            if local.is_some_and(|local| self.get(prefix, local).is_some()) {
                return false;
            }
        }
        text.chars().count() > 2 && text.chars().any(char::is_alphabetic)
    }
}

fn is_snake_case(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Lower-cases, strips punctuation, collapses whitespace to underscores,
/// and truncates.
fn normalize_key(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let truncated: String = joined.chars().take(MAX_KEY_LEN).collect();
    truncated.trim_matches('_').to_string()
}

/// Applies numeric collision suffixing against the section's existing
/// keys.
pub(super) fn free_key(section: &IndexMap<String, String>, base: &str) -> String {
    if !section.contains_key(base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if !section.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_mints_namespaced_key() {
        let mut table = StringTable::new();
        let key = table.extract("home", "Hello World").unwrap();
        assert_eq!(key, "home_hello_world");
        assert_eq!(table.get("home", "hello_world"), Some("Hello World"));
    }

    #[test]
    fn test_repeat_extraction_reuses_key() {
        let mut table = StringTable::new();
        let first = table.extract("home", "Hello World").unwrap();
        let second = table.extract("home", "Hello World").unwrap();
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_prefixes_are_independent_namespaces() {
        let mut table = StringTable::new();
        let home = table.extract("home", "Save").unwrap();
        let detail = table.extract("detail", "Save").unwrap();
        assert_eq!(home, "home_save");
        assert_eq!(detail, "detail_save");
    }

    #[test]
    fn test_collision_suffixing() {
        let mut table = StringTable::new();
        assert_eq!(table.extract("a", "Save!").unwrap(), "a_save");
        assert_eq!(table.extract("a", "Save?").unwrap(), "a_save_2");
        assert_eq!(table.extract("a", "SAVE.").unwrap(), "a_save_3");
    }

    #[test]
    fn test_not_extractable() {
        let mut table = StringTable::new();
        assert!(table.extract("a", "@{title}").is_none());
        assert!(table.extract("a", "${title}").is_none());
        assert!(table.extract("a", "@string/a_title").is_none());
        assert!(table.extract("a", "ok").is_none());
        assert!(table.extract("a", "123").is_none());
    }

    #[test]
    fn test_resolved_key_not_reextracted() {
        let mut table = StringTable::new();
        table.extract("home", "Hello World").unwrap();
        assert!(table.extract("home", "home_hello_world").is_none());
    }

    #[test]
    fn test_normalize_key_rules() {
        assert_eq!(normalize_key("  Hello,   World! "), "hello_world");
        assert_eq!(normalize_key("Tap to continue"), "tap_to_continue");
        let long = normalize_key("a very long label that keeps going on and on");
        assert!(long.chars().count() <= MAX_KEY_LEN);
        assert!(!long.ends_with('_'));
    }

    #[test]
    fn test_persisted_entries_survive() {
        let mut table = StringTable::from_value(Some(json!({
            "home": {"greeting": "Hello World", "manual": "Hand-added"}
        })));
        // The existing key wins over minting a new one.
        assert_eq!(
            table.extract("home", "Hello World").unwrap(),
            "home_greeting"
        );
        assert_eq!(table.get("home", "manual"), Some("Hand-added"));
    }

    #[test]
    fn test_malformed_sections_dropped() {
        let table = StringTable::from_value(Some(json!({
            "home": {"ok": "fine", "bad": 42},
            "broken": "not a section"
        })));
        assert_eq!(table.get("home", "ok"), Some("fine"));
        assert!(table.get("home", "bad").is_none());
        assert_eq!(table.len(), 1);
    }
}
