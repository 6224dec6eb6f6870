//! File-based state store.
//!
//! [`FileStore`] keeps every entry in a single JSON object:
//!
//! ```text
//! {
//!   "sidebar-guides": "false",
//!   "sidebar-reference": "true"
//! }
//! ```
//!
//! The file is read once when the store is opened. Every `set` rewrites the
//! whole file. Errors on either side are logged but never fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::StateStore;

/// [`StateStore`] persisted to a JSON file on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries if the file exists.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// is logged and treated as empty.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!(path = %parent.display(), "failed to create state directory: {e}");
            return;
        }

        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to encode sidebar state: {e}");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), "failed to write sidebar state: {e}");
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no sidebar state file, starting empty");
            return BTreeMap::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read sidebar state: {e}");
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring malformed sidebar state: {e}");
        BTreeMap::new()
    })
}
