//! Integration tests for Marigold.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marigold-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Invariant checks over operation sequences
//! - `cart_scenarios` - End-to-end storefront scenarios
//! - `persistence` - Slot hydration, corruption, and reload behavior
//!
//! The library part holds shared fixtures: a self-cleaning on-disk slot and
//! store builders over it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use marigold_cart::{CartStore, JsonFileStorage, NullSink};
use rust_decimal::Decimal;

/// A cart slot file in the system temp directory, removed on drop.
#[derive(Debug)]
pub struct TempSlot {
    path: PathBuf,
}

impl TempSlot {
    /// Create a slot path that no other test shares.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(format!("marigold-it-{}.json", uuid::Uuid::new_v4())),
        }
    }

    /// The file backing the slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A storage adapter over this slot.
    #[must_use]
    pub fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(&self.path)
    }

    /// A cart store hydrated from this slot, with notifications dropped.
    #[must_use]
    pub fn open_store(&self) -> CartStore {
        CartStore::open(Box::new(self.storage()), Box::new(NullSink))
    }
}

impl Default for TempSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempSlot {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// A rand amount from cents.
#[must_use]
pub fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
