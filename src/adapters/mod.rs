//! Adapters implementing the port traits

pub mod fs_storage;
pub mod memory_storage;
pub mod preset_dialog;

pub use fs_storage::FsStorage;
pub use memory_storage::MemoryStorage;
pub use preset_dialog::PresetDialog;
