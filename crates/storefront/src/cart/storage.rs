//! Persistence slot for the cart.
//!
//! The cart owns exactly one durable slot: a serialized line list written
//! wholesale on every mutation and read once at startup. [`CartStorage`]
//! abstracts the slot so tests and session-only callers can swap the file
//! for memory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Errors that can occur reading or writing the cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A single named slot holding the serialized cart.
pub trait CartStorage: Send + Sync {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON file at a fixed path.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a crash mid-write never leaves a torn slot. Concurrent
/// processes writing the same path are last-write-wins; there is no
/// locking. That matches the slot's scope (one local session) and is a
/// documented limitation, not a guarantee.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot at the given path. The file is not touched until the
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl CartStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let temp = self.temp_path();
        fs::write(&temp, contents)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests and session-only carts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_slot() -> JsonFileStorage {
        let path = std::env::temp_dir().join(format!("bramble-slot-{}.json", uuid::Uuid::new_v4()));
        JsonFileStorage::new(path)
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let storage = temp_slot();
        assert!(storage.read().expect("read").is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let storage = temp_slot();
        storage.write("[]").expect("write");
        assert_eq!(storage.read().expect("read").as_deref(), Some("[]"));
        fs::remove_file(storage.path()).expect("cleanup");
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let storage = temp_slot();
        storage.write("first").expect("write");
        storage.write("second").expect("write");
        assert_eq!(storage.read().expect("read").as_deref(), Some("second"));
        fs::remove_file(storage.path()).expect("cleanup");
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.read().expect("read").is_none());
        storage.write("[1]").expect("write");
        assert_eq!(storage.read().expect("read").as_deref(), Some("[1]"));
    }
}
