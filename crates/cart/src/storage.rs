//! Persistence slot for the cart.
//!
//! The cart survives page reloads through a single named slot in a local
//! key-value store. [`JsonFileStorage`] maps that slot to one JSON file
//! holding the serialized entry array; [`MemoryStorage`] keeps it in memory
//! for tests and ephemeral sessions.
//!
//! The slot is deliberately forgiving: an absent slot is an empty cart, not
//! an error, and the store treats a malformed slot the same way after logging
//! it. A failed write is logged and the in-memory cart stays authoritative
//! for the rest of the session.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use marigold_core::CartEntry;
use thiserror::Error;

/// Errors raised by a persistence slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot could not be read.
    #[error("failed to read cart slot: {0}")]
    Read(#[source] std::io::Error),

    /// The slot could not be written.
    #[error("failed to write cart slot: {0}")]
    Write(#[source] std::io::Error),

    /// The slot holds data that does not parse as an entry array.
    #[error("cart slot holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A durable slot holding the serialized cart entry array.
pub trait CartStorage {
    /// Read the saved entry array. An absent slot yields an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the slot exists but cannot be read or
    /// parsed. Callers treat this as "no saved cart" after reporting it.
    fn load(&self) -> Result<Vec<CartEntry>, StorageError>;

    /// Replace the slot contents with the given entry array.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write fails. Callers report the
    /// failure and keep the in-memory cart authoritative.
    fn save(&self, entries: &[CartEntry]) -> Result<(), StorageError>;
}

/// Slot backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot at the given file path. Nothing is read or written
    /// until [`CartStorage::load`] or [`CartStorage::save`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path backing this slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<CartEntry>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read(e)),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), StorageError> {
        let serialized = serde_json::to_string_pretty(entries)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }
        fs::write(&self.path, serialized).map_err(StorageError::Write)
    }
}

/// Slot held in memory, for tests and sessions that skip durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<Vec<CartEntry>>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartEntry>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), StorageError> {
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use marigold_core::NewEntry;
    use rust_decimal::Decimal;

    fn slot_path() -> PathBuf {
        std::env::temp_dir().join(format!("marigold-cart-{}.json", uuid::Uuid::new_v4()))
    }

    fn sample_entries() -> Vec<CartEntry> {
        vec![
            NewEntry::service("Haircut", Decimal::new(15000, 2), "Hair", "Jane")
                .into_entry()
                .unwrap(),
            NewEntry::item("Mug", Decimal::new(5000, 2), "Kitchen")
                .into_entry()
                .unwrap(),
        ]
    }

    #[test]
    fn test_absent_slot_loads_empty() {
        let storage = JsonFileStorage::new(slot_path());
        assert_eq!(storage.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let path = slot_path();
        let storage = JsonFileStorage::new(&path);
        let entries = sample_entries();

        storage.save(&entries).unwrap();
        assert_eq!(storage.load().unwrap(), entries);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_slot_is_reported() {
        let path = slot_path();
        fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.load(), Err(StorageError::Malformed(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_wrong_shape_is_reported() {
        let path = slot_path();
        fs::write(&path, r#"{"name": "not an array"}"#).unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.load(), Err(StorageError::Malformed(_))));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("marigold-{}", uuid::Uuid::new_v4()));
        let storage = JsonFileStorage::new(dir.join("slot.json"));

        storage.save(&sample_entries()).unwrap();
        assert_eq!(storage.load().unwrap().len(), 2);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());

        let entries = sample_entries();
        storage.save(&entries).unwrap();
        assert_eq!(storage.load().unwrap(), entries);

        storage.save(&[]).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }
}
