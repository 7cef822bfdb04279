//! Persisted key-value store.
//!
//! Values are JSON-encoded strings keyed by name, mirroring a browser-style
//! local storage layout: one `<key>.json` file per key under the state
//! directory. Reads fall back to a caller-supplied default when a key is
//! absent or its contents fail to decode; writes never propagate failures.
//! The in-memory state of the owning component stays authoritative for the
//! session either way.

use std::{collections::HashMap, fs, path::Path, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::fs::state_dir;

/// Key under which the theme flag is persisted.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Key under which the project collection is persisted.
pub const PROJECTS_KEY: &str = "portfolio-projects";

/// A shared handle to the persisted key-value store.
///
/// Constructed once at startup and passed to every component that needs
/// persistence; nothing reaches for the store through ambient lookup.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    /// One `<key>.json` file per key under the given directory.
    Dir(PathBuf),
    /// Process-local map, used by tests.
    Memory(Arc<RwLock<HashMap<String, String>>>),
}

impl Store {
    pub fn new() -> Self {
        Self {
            backend: Backend::Dir(state_dir()),
        }
    }

    /// Read the value under `key`, returning `fallback` when the key is absent or its
    /// contents fail to decode. A decode failure is logged and never clobbers the store.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.raw(key) else {
            return fallback;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("discarding malformed value under {key:?}: {e}");
                fallback
            }
        }
    }

    /// Serialize `value` under `key`. Failures are logged, never propagated.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to encode value for {key:?}: {e}");
                return;
            }
        };

        match &self.backend {
            Backend::Dir(dir) => {
                let result = fs::create_dir_all(dir).and_then(|()| fs::write(entry_path(dir, key), raw));
                if let Err(e) = result {
                    warn!("failed to persist {key:?}: {e}");
                }
            }
            Backend::Memory(map) => {
                map.write().insert(key.to_owned(), raw);
            }
        }
    }

    fn raw(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Dir(dir) => fs::read_to_string(entry_path(dir, key)).ok(),
            Backend::Memory(map) => map.read().get(key).cloned(),
        }
    }

    /// Create a memory backed store, for use in tests. Clones share the same map.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(RwLock::new(HashMap::new()))),
        }
    }

    #[cfg(test)]
    pub(crate) fn at(dir: PathBuf) -> Self {
        Self {
            backend: Backend::Dir(dir),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

#[cfg(test)]
mod test {
    use crate::repository::{Category, Project, ProjectDraft};

    use super::*;

    #[test]
    fn test_missing_key_returns_fallback() {
        let store = Store::in_memory();

        assert!(!store.read(DARK_MODE_KEY, false));
        assert!(store.read(DARK_MODE_KEY, true));
    }

    #[test]
    fn test_round_trip_preserves_collection() {
        let store = Store::in_memory();

        let mut draft = ProjectDraft {
            title: "Sketchbook".into(),
            description: "Drawing app".into(),
            category: Category::Frontend,
            ..ProjectDraft::default()
        };
        draft.push_technology("React");
        let projects = vec![draft.into_project(42.into())];

        store.write(PROJECTS_KEY, &projects);
        let loaded: Vec<Project> = store.read(PROJECTS_KEY, Vec::new());

        assert_eq!(loaded, projects);
    }

    #[test]
    fn test_decode_failure_returns_fallback() {
        let store = Store::in_memory();

        // A JSON string is valid storage content but not a valid bool.
        store.write(DARK_MODE_KEY, "definitely not a bool");

        assert!(store.read(DARK_MODE_KEY, true));
    }

    #[test]
    fn test_dir_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().to_path_buf());

        store.write(DARK_MODE_KEY, &true);

        let reopened = Store::at(dir.path().to_path_buf());
        assert!(reopened.read(DARK_MODE_KEY, false));
    }

    #[test]
    fn test_dir_backend_malformed_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("darkMode.json"), "{not json").unwrap();

        let store = Store::at(dir.path().to_path_buf());

        assert!(!store.read(DARK_MODE_KEY, false));
    }
}
