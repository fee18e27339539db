//! Storage port trait
//!
//! The session hands the codec's bytes to a `ConfigStorage` on save and asks
//! it for bytes on open. What a path means is up to the adapter.

use std::path::Path;

use crate::domain::ConfiguratorResult;

/// Reads and writes whole configuration files.
pub trait ConfigStorage {
    /// Read the complete contents stored at `path`
    fn read(&self, path: &Path) -> ConfiguratorResult<Vec<u8>>;

    /// Replace the contents stored at `path` with `bytes`
    fn write(&mut self, path: &Path, bytes: &[u8]) -> ConfiguratorResult<()>;

    /// Check whether a file is stored at `path`, without reading it
    fn exists(&self, path: &Path) -> bool;
}
