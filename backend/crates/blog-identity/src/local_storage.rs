//! Key/value storage that outlives the client process

use crate::{IdentityError, Result as IdentityErrorResult};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::{Mutex, RwLock};

/// Key holding the signed-in uid
pub const UID_KEY: &str = "uid";

#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get(&self, key: &str) -> IdentityErrorResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> IdentityErrorResult<()>;

    /// Removing an absent key succeeds
    async fn remove(&self, key: &str) -> IdentityErrorResult<()>;
}

#[derive(Default)]
pub struct MemoryLocalStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get(&self, key: &str) -> IdentityErrorResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> IdentityErrorResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> IdentityErrorResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// JSON object file, rewritten whole on every change.
///
/// Writes go to a sibling temp file that is renamed over the original, so a
/// crash never leaves a half-written file behind.
pub struct FileLocalStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileLocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> IdentityErrorResult<HashMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(IdentityError::local_storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            IdentityError::local_storage(format!("{} is not valid JSON: {e}", self.path.display()))
        })
    }

    /// Entries to build a write on. An unreadable file is replaced rather than
    /// blocking every later `set` and `remove`.
    async fn entries_for_write(&self) -> HashMap<String, String> {
        match self.read_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding unreadable local storage: {e}");
                HashMap::new()
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_entries(&self, entries: &HashMap<String, String>) -> IdentityErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                IdentityError::local_storage(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| IdentityError::local_storage(e.to_string()))?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await.map_err(|e| {
            IdentityError::local_storage(format!("failed to write {}: {e}", temp.display()))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            IdentityError::local_storage(format!(
                "failed to replace {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Wrote {} local storage entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get(&self, key: &str) -> IdentityErrorResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> IdentityErrorResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.entries_for_write().await;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> IdentityErrorResult<()> {
        let _guard = self.lock.lock().await;
        match self.read_entries().await {
            Ok(mut entries) => {
                if entries.remove(key).is_none() {
                    return Ok(());
                }
                self.write_entries(&entries).await
            }
            Err(e) => {
                // Nothing trustworthy is left in the file, including `key`
                warn!("Discarding unreadable local storage: {e}");
                self.write_entries(&HashMap::new()).await
            }
        }
    }
}
