//! File dialog port trait
//!
//! Stands in for the native "open/save file" dialog. Returning `None` means
//! the user backed out without picking a file.

use std::path::PathBuf;

/// Which button the dialog shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Open,
    Save,
}

/// File type filter offered by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    pub extension: &'static str,
}

/// Filter used for configuration files.
pub const CONFIG_FILE_FILTER: FileFilter = FileFilter {
    description: "Configuration",
    extension: "ini",
};

/// Asks the user for a path.
pub trait FileDialog {
    fn pick(&mut self, mode: DialogMode, filter: &FileFilter) -> Option<PathBuf>;
}
