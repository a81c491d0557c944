//! In-memory store for tests and embedding

use super::KeyValueStore;
use crate::error::StorageError;
use rustc_hash::FxHashMap;
use std::io;
use std::sync::{Arc, RwLock};

/// `HashMap`-backed store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<FxHashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> io::Error {
    io::Error::other("lock poisoned")
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Read {
            key: key.to_string(),
            source: poisoned(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Write {
            key: key.to_string(),
            source: poisoned(),
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
