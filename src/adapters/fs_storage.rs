//! Filesystem storage adapter
//!
//! Implements `ConfigStorage` with plain `std::fs` calls. Files are written
//! whole; there is no partial update.

use std::path::Path;

use crate::domain::{ConfiguratorError, ConfiguratorResult};
use crate::ports::ConfigStorage;

/// Zero-sized adapter over the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl ConfigStorage for FsStorage {
    fn read(&self, path: &Path) -> ConfiguratorResult<Vec<u8>> {
        let bytes = std::fs::read(path).map_err(|e| {
            ConfiguratorError::Storage(format!("Unable to read '{}': {e}", path.display()))
        })?;
        log::debug!("Read {} bytes from '{}'", bytes.len(), path.display());
        Ok(bytes)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> ConfiguratorResult<()> {
        std::fs::write(path, bytes).map_err(|e| {
            ConfiguratorError::Storage(format!("Unable to write '{}': {e}", path.display()))
        })?;
        log::debug!("Wrote {} bytes to '{}'", bytes.len(), path.display());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
