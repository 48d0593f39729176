//! Persistent string and color resource tables.
//!
//! Both tables live as JSON files in the resource directory and are shared
//! mutable state across a whole batch: loaded once at engine start, fed by
//! every file's extraction walk, and flushed once at the end of a
//! successful run. Persistence is merge-only. Entries loaded from disk are
//! never overwritten or removed, so manually-added keys survive
//! regeneration.

mod colors;
mod extract;
mod strings;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub use colors::ColorTable;
pub use extract::extract_document;
pub use strings::StringTable;

use crate::QuiltError;

/// File name of the persisted string table.
pub const STRINGS_FILE: &str = "strings.json";

/// File name of the persisted color table.
pub const COLORS_FILE: &str = "colors.json";

/// The full resource state for one batch run.
#[derive(Debug, Default)]
pub struct ResourceTable {
    strings: StringTable,
    colors: ColorTable,
}

impl ResourceTable {
    /// Creates an empty table, for runs without prior state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads both tables from the resource directory. A missing file means
    /// an empty table; an unparseable file is non-fatal and logged as a
    /// warning.
    pub fn load(resource_dir: &Path) -> Self {
        Self {
            strings: StringTable::from_value(read_table(&resource_dir.join(STRINGS_FILE))),
            colors: ColorTable::from_value(read_table(&resource_dir.join(COLORS_FILE))),
        }
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn strings_mut(&mut self) -> &mut StringTable {
        &mut self.strings
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorTable {
        &mut self.colors
    }

    /// Borrows both tables at once, for the extraction walk.
    pub fn tables_mut(&mut self) -> (&mut StringTable, &mut ColorTable) {
        (&mut self.strings, &mut self.colors)
    }

    /// Writes both tables back to the resource directory.
    ///
    /// # Errors
    ///
    /// Returns [`QuiltError::Resources`] when the directory cannot be
    /// created or a table cannot be serialized or written.
    pub fn persist(&self, resource_dir: &Path) -> Result<(), QuiltError> {
        fs::create_dir_all(resource_dir)
            .map_err(|err| QuiltError::Resources(format!("creating {resource_dir:?}: {err}")))?;
        write_table(&resource_dir.join(STRINGS_FILE), &self.strings.to_value())?;
        write_table(&resource_dir.join(COLORS_FILE), &self.colors.to_value())?;
        debug!(
            strings = self.strings.len(),
            colors = self.colors.len();
            "Persisted resource tables"
        );
        Ok(())
    }
}

fn read_table(path: &PathBuf) -> Option<serde_json::Value> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path:? = path, err:% = err; "Failed to read resource table; starting empty");
            return None;
        }
    };
    match serde_json::from_str(&source) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(path:? = path, err:% = err; "Failed to parse resource table; starting empty");
            None
        }
    }
}

fn write_table(path: &Path, value: &serde_json::Value) -> Result<(), QuiltError> {
    let mut rendered = serde_json::to_string_pretty(value)
        .map_err(|err| QuiltError::Resources(format!("serializing {path:?}: {err}")))?;
    rendered.push('\n');
    fs::write(path, rendered)
        .map_err(|err| QuiltError::Resources(format!("writing {path:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_dir_is_empty() {
        let table = ResourceTable::load(Path::new("/definitely/not/here"));
        assert!(table.strings().is_empty());
        assert!(table.colors().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = ResourceTable::new();
        table.strings_mut().extract("home", "Hello World");
        table.colors_mut().extract("#000000");
        table.persist(dir.path()).unwrap();

        let reloaded = ResourceTable::load(dir.path());
        assert_eq!(
            reloaded.strings().get("home", "hello_world"),
            Some("Hello World")
        );
        assert_eq!(reloaded.colors().get("black"), Some("#000000"));
    }

    #[test]
    fn test_unparseable_table_is_nonfatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STRINGS_FILE), "{broken").unwrap();
        let table = ResourceTable::load(dir.path());
        assert!(table.strings().is_empty());
    }
}
