//! In-memory storage adapter for development and testing without a disk.
//!
//! Every read and write is logged at INFO level so you can see exactly what
//! a session would have put on disk:
//!
//!   RUST_LOG=configurator_lib=info cargo test

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{ConfiguratorError, ConfiguratorResult};
use crate::ports::ConfigStorage;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    files: HashMap<PathBuf, Vec<u8>>,
    /// When set, every write fails (simulates a read-only medium)
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `bytes` at `path`.
    pub fn with_file(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let mut storage = Self::new();
        storage.files.insert(path.into(), bytes);
        storage
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Stored bytes at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ConfigStorage for MemoryStorage {
    fn read(&self, path: &Path) -> ConfiguratorResult<Vec<u8>> {
        let bytes = self.files.get(path).cloned().ok_or_else(|| {
            ConfiguratorError::Storage(format!("Unable to open '{}'", path.display()))
        })?;
        log::info!("[MEMORY STORAGE] READ  {} ← {} bytes", path.display(), bytes.len());
        Ok(bytes)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> ConfiguratorResult<()> {
        if self.read_only {
            return Err(ConfiguratorError::Storage(format!(
                "Unable to open '{}' for writing",
                path.display()
            )));
        }
        log::info!("[MEMORY STORAGE] WRITE {} → {} bytes", path.display(), bytes.len());
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
