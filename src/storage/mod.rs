//! Persistence of player state
//!
//! [`KeyValueStore`] is the storage boundary: atomic get/put of opaque bytes
//! under a key. [`PlayerRepository`] maps the player profile onto it.

mod file;
mod memory;
mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{PLAYER_KEY, PlayerRepository};

use crate::error::StorageError;

/// Key-value storage with all-or-nothing writes per key
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    /// Returns `StorageError::Read` if the backing store fails.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// Either the whole new value is stored or the old one is kept.
    ///
    /// # Errors
    /// Returns `StorageError::Write` if the value could not be stored.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}
