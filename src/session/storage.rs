//! Durable key-value storage backing the session
//!
//! The file backend keeps a flat `key: value` YAML map, rewritten whole on
//! every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::Mutex;

use crate::error::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

/// Durable string key-value storage that survives process restarts
pub trait KeyValueStore: Send + Sync {
    /// Read a value; an absent key is `Ok(None)`, not an error
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is a no-op
    fn remove(&self, key: &str) -> Result<()>;
}

/// YAML-file backed storage
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the file at `path`, created lazily on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Entries to start a mutation from, and whether the file must be
    /// rewritten regardless. A corrupt file is replaced, not preserved.
    fn read_for_update(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupt(e)) => {
                log::warn!(
                    "Discarding unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(entries).map_err(|e| StorageError::Io(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        // Holds a bearer credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let (mut entries, corrupt) = self.read_for_update()?;
        if entries.remove(key).is_some() || corrupt {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}
