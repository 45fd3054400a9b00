//! Persistent key-value storage for the credential pair.
//!
//! The client depends only on the [`TokenStore`] capability set
//! (`get`, `set`, `remove`). Two implementations ship with the crate:
//!
//! - [`MemoryTokenStore`]: process-local, useful for tests and short-lived tools
//! - [`FileTokenStore`]: a JSON object on disk, surviving process restarts

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Errors raised by a [`TokenStore`] write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("Token store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored entries could not be serialized.
    #[error("Token store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string key-value store mirroring the client's credentials.
///
/// Reads never fail: an unreadable entry is reported as absent.
pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal could not be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// An in-memory [`TokenStore`].
///
/// # Example
///
/// ```rust
/// use temucosoft_api::auth::{MemoryTokenStore, TokenStore};
///
/// let store = MemoryTokenStore::new();
/// store.set("access_token", "T1").unwrap();
/// assert_eq!(store.get("access_token").as_deref(), Some("T1"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// A [`TokenStore`] persisted as a flat JSON object in a single file.
///
/// The file is re-read on every access so that several processes sharing
/// it observe each other's writes. A missing or corrupt file reads as empty.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileTokenStore {
    /// Creates a store backed by the file at `path`. The file is created on
    /// the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> HashMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("temucosoft-api-{}-{name}", std::process::id()))
            .join("tokens.json")
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryTokenStore::new();
        assert!(store.get("access_token").is_none());

        store.set("access_token", "T1").unwrap();
        assert_eq!(store.get("access_token"), Some("T1".to_string()));

        store.remove("access_token").unwrap();
        assert!(store.get("access_token").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_remove_missing_key_is_ok() {
        let store = MemoryTokenStore::new();
        assert!(store.remove("refresh_token").is_ok());
    }

    #[test]
    fn test_memory_store_with_entries() {
        let store = MemoryTokenStore::with_entries([("access_token", "T1"), ("refresh_token", "R1")]);
        assert_eq!(store.get("refresh_token"), Some("R1".to_string()));
    }

    #[test]
    fn test_arc_store_shares_state() {
        let store = Arc::new(MemoryTokenStore::new());
        let handle: Arc<MemoryTokenStore> = Arc::clone(&store);
        handle.set("access_token", "T1").unwrap();
        assert_eq!(store.get("access_token"), Some("T1".to_string()));
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let first = FileTokenStore::new(&path);
        first.set("access_token", "T1").unwrap();
        first.set("refresh_token", "R1").unwrap();

        let second = FileTokenStore::new(&path);
        assert_eq!(second.get("access_token"), Some("T1".to_string()));
        assert_eq!(second.get("refresh_token"), Some("R1".to_string()));

        second.remove("access_token").unwrap();
        assert!(first.get("access_token").is_none());
        assert_eq!(first.get("refresh_token"), Some("R1".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.get("access_token").is_none());

        store.set("access_token", "T9").unwrap();
        assert_eq!(store.get("access_token"), Some("T9".to_string()));

        let _ = fs::remove_file(&path);
    }
}
