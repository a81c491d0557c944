//! File-backed store
//!
//! Each key is one file inside the store directory. Writes go to a temporary
//! file in the same directory which is synced and then renamed over the
//! target, so readers only ever see a complete old or new value.

use super::KeyValueStore;
use crate::error::StorageError;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory of key files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store, creating the directory if needed
    ///
    /// # Errors
    /// Returns `StorageError::Open` if the directory cannot be created or is
    /// not a directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        let open_err = |source| StorageError::Open {
            path: dir.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(open_err)?;
        if !dir.is_dir() {
            return Err(open_err(io::Error::other("not a directory")));
        }

        debug!("opened store at {}", dir.display());
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> io::Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(self.dir.join(key))
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid key {key:?}"),
            ))
        }
    }

    fn write_atomic(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        // Make the rename itself durable where the platform allows it
        if let Err(e) = sync_dir(&self.dir) {
            debug!("could not sync {}: {e}", self.dir.display());
        }
        Ok(())
    }
}

fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let read_err = |source| StorageError::Read {
            key: key.to_string(),
            source,
        };
        let path = self.key_path(key).map_err(read_err)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_err(e)),
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        let path = self.key_path(key).map_err(write_err)?;

        self.write_atomic(&path, value).map_err(write_err)?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
