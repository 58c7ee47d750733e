//! Persistent key/value storage backends.
//!
//! The contract mirrors what the consoles persist their session under in the
//! browser: string keys to string values, tolerant reads. The session store
//! treats every backend error as failed persistence, never as a crash.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key/value persistence contract.
pub trait Storage: Send + Sync {
    /// Read a value. Missing or unreadable entries are `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default storage directory under the platform config dir,
    /// e.g. `~/.config/venue-console` on Linux.
    ///
    /// Falls back to the current directory if no config dir is available.
    pub fn default_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("venue-console")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        // Write-then-rename so a crash never leaves a torn value behind.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.tmp", key));
        fs::write(&tmp, value).map_err(|source| StorageError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Write { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove { path, source }),
        }
    }
}

/// In-memory storage for tests and embeddings that opt out of persistence.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
