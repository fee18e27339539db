//! Editing session
//!
//! One session owns one `ConfigRecord` and remembers where it came from.
//! Loading replaces the record wholesale and only after the whole file has
//! decoded; any failure leaves the session exactly as it was.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::domain::{ConfigRecord, ConfiguratorResult};
use crate::editor;
use crate::ports::{ConfigStorage, DialogMode, FileDialog, CONFIG_FILE_FILTER};

/// The configuration being edited, plus its file state
#[derive(Debug, Clone)]
pub struct EditorSession {
    record: ConfigRecord,
    path: Option<PathBuf>,
    is_new: bool,
    is_saved: bool,
}

impl EditorSession {
    /// A fresh session holding the default configuration.
    pub fn new() -> Self {
        Self {
            record: ConfigRecord::default(),
            path: None,
            is_new: true,
            is_saved: false,
        }
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.record
    }

    /// Mutable access for the form. Any edit marks the session unsaved.
    pub fn record_mut(&mut self) -> &mut ConfigRecord {
        self.is_saved = false;
        &mut self.record
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True until the session has been loaded from or saved to a file.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// True right after a successful save, until the next edit or load.
    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    /// Discard the current record and start over from the defaults.
    pub fn new_file(&mut self) {
        log::info!("New configuration");
        *self = Self::new();
    }

    /// Ask the user for a file and load it.
    ///
    /// Returns `Ok(None)` if the dialog was cancelled, in which case nothing
    /// changes.
    pub fn open_file(
        &mut self,
        dialog: &mut dyn FileDialog,
        storage: &dyn ConfigStorage,
    ) -> ConfiguratorResult<Option<PathBuf>> {
        let Some(path) = dialog.pick(DialogMode::Open, &CONFIG_FILE_FILTER) else {
            log::debug!("Open cancelled");
            return Ok(None);
        };
        self.open_path(storage, &path)?;
        Ok(Some(path))
    }

    /// Load the configuration stored at `path`.
    ///
    /// On a read or decode error the previous record, path and flags are kept.
    pub fn open_path(&mut self, storage: &dyn ConfigStorage, path: &Path) -> ConfiguratorResult<()> {
        let bytes = storage.read(path).inspect_err(|e| {
            log::error!("Unable to open '{}': {e}", path.display());
        })?;

        let (record, consumed) = codec::decode_prefix(&bytes).inspect_err(|e| {
            log::error!("Unable to load '{}': {e}", path.display());
        })?;

        if consumed < bytes.len() {
            log::warn!(
                "'{}': ignoring {} trailing bytes",
                path.display(),
                bytes.len() - consumed
            );
        }
        log::info!("Loaded '{}' ({consumed} bytes)", path.display());

        self.record = record;
        self.path = Some(path.to_path_buf());
        self.is_new = false;
        self.is_saved = false;
        Ok(())
    }

    /// Ask the user where to save and write the configuration there.
    ///
    /// Returns `Ok(None)` if the dialog was cancelled.
    pub fn save_file(
        &mut self,
        dialog: &mut dyn FileDialog,
        storage: &mut dyn ConfigStorage,
    ) -> ConfiguratorResult<Option<PathBuf>> {
        let Some(path) = dialog.pick(DialogMode::Save, &CONFIG_FILE_FILTER) else {
            log::debug!("Save cancelled");
            return Ok(None);
        };
        self.save_to(storage, &path)?;
        Ok(Some(path))
    }

    /// Encode the configuration and write it to `path`.
    ///
    /// Out-of-domain values are written as they are, with a warning.
    pub fn save_to(&mut self, storage: &mut dyn ConfigStorage, path: &Path) -> ConfiguratorResult<()> {
        if let Err(e) = editor::check(&self.record) {
            log::warn!("Saving '{}' with unusual values: {e}", path.display());
        }

        let bytes = codec::encode(&self.record);
        storage.write(path, &bytes).inspect_err(|e| {
            log::error!("Unable to save '{}': {e}", path.display());
        })?;
        log::info!("Saved '{}' ({} bytes)", path.display(), bytes.len());

        self.path = Some(path.to_path_buf());
        self.is_new = false;
        self.is_saved = true;
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
