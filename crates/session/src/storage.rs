//! Pluggable key-value persistence for the session.
//!
//! The browser build keeps this in `sessionStorage`; here the same contract
//! is a trait so tests run against an in-memory map and the desktop shell
//! against a small JSON file in the OS data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Persisted entry key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Persisted entry key for the JSON-serialized user profile.
pub const USER_KEY: &str = "user";
/// Persisted entry key for the canonical role string.
pub const ROLE_KEY: &str = "role";

/// String key-value storage with `sessionStorage` semantics: infallible from
/// the caller's point of view, absence means "not set".
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON-file-backed storage at `{app_data_dir}/ecoobra/session.json`.
///
/// Writes are flushed on every mutation; a failed flush is logged and the
/// in-memory view stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Open the storage at the default OS data path.
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(session_file_path()?)
    }

    /// Open the storage at an explicit path (absent file means empty).
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt session file at {path:?}"))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read session file at {path:?}"))
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let result = serde_json::to_string_pretty(&self.entries)
            .context("failed to serialize session entries")
            .and_then(|raw| {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {parent:?}"))?;
                }
                std::fs::write(&self.path, raw)
                    .with_context(|| format!("failed to write session file at {:?}", self.path))
            });

        if let Err(err) = result {
            tracing::error!("failed to persist session: {err:?}");
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

/// Resolve the path to the session file: `{app_data_dir}/ecoobra/session.json`.
fn session_file_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut path = base;
    path.push("ecoobra");
    path.push("session.json");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY), None);

        storage.set(TOKEN_KEY, "abc123");
        assert_eq!(storage.get(TOKEN_KEY), Some("abc123".to_string()));

        storage.remove(TOKEN_KEY);
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn file_storage_survives_reopen() {
        let dir = std::env::temp_dir().join(format!(
            "ecoobra-session-test-{}",
            std::process::id()
        ));
        let path = dir.join("session.json");
        let _ = std::fs::remove_file(&path);

        {
            let mut storage = FileStorage::open(&path).unwrap();
            storage.set(TOKEN_KEY, "tok");
            storage.set(ROLE_KEY, "tecnico");
        }

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get(TOKEN_KEY), Some("tok".to_string()));
        assert_eq!(storage.get(ROLE_KEY), Some("tecnico".to_string()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let path = std::env::temp_dir().join("ecoobra-session-test-does-not-exist.json");
        let _ = std::fs::remove_file(&path);
        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get(USER_KEY), None);
    }
}
