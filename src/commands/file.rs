//! File commands — new, show, export, import, fields

use std::io::Write;
use std::path::Path;

use crate::domain::{ConfigRecord, ConfiguratorError, ConfiguratorResult, FIELD_ORDER};
use crate::editor;
use crate::ports::ConfigStorage;
use crate::session::EditorSession;

use super::out_err;

/// Write a default configuration to `path`. Refuses to overwrite.
pub fn new_config(
    storage: &mut dyn ConfigStorage,
    path: &Path,
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    if storage.exists(path) {
        return Err(ConfiguratorError::Storage(format!(
            "'{}' already exists",
            path.display()
        )));
    }
    let mut session = EditorSession::new();
    session.save_to(storage, path)?;
    writeln!(
        out,
        "Created '{}' ({} bytes)",
        path.display(),
        session.record().encoded_len()
    )
    .map_err(out_err)
}

/// Print every field of the configuration at `path`.
pub fn show_config(
    storage: &mut dyn ConfigStorage,
    path: &Path,
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    let mut session = EditorSession::new();
    session.open_path(storage, path)?;

    let rows = editor::describe(session.record());
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.label, row.value).map_err(out_err)?;
    }
    Ok(())
}

/// Dump the configuration at `path` as pretty JSON, to `json` or to `out`.
pub fn export_config(
    storage: &mut dyn ConfigStorage,
    path: &Path,
    json: Option<&Path>,
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    let mut session = EditorSession::new();
    session.open_path(storage, path)?;

    let text = serde_json::to_string_pretty(session.record())
        .map_err(|e| ConfiguratorError::Serialization(format!("Serialization error: {e}")))?;

    match json {
        Some(json_path) => {
            storage.write(json_path, text.as_bytes())?;
            log::info!("Exported '{}' to '{}'", path.display(), json_path.display());
            writeln!(out, "Exported '{}'", json_path.display()).map_err(out_err)
        }
        None => writeln!(out, "{text}").map_err(out_err),
    }
}

/// Build a configuration from the JSON at `json` and write it to `path`.
///
/// The JSON must describe a record the form could have produced.
pub fn import_config(
    storage: &mut dyn ConfigStorage,
    json: &Path,
    path: &Path,
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    let text = storage.read(json)?;
    let record: ConfigRecord = serde_json::from_slice(&text).map_err(|e| {
        ConfiguratorError::Serialization(format!("Failed to parse '{}': {e}", json.display()))
    })?;
    editor::check(&record)?;

    let mut session = EditorSession::new();
    *session.record_mut() = record;
    session.save_to(storage, path)?;
    writeln!(
        out,
        "Imported '{}' into '{}' ({} bytes)",
        json.display(),
        path.display(),
        session.record().encoded_len()
    )
    .map_err(out_err)
}

/// Print the field keys accepted by `set`, in file order.
pub fn list_fields(out: &mut dyn Write) -> ConfiguratorResult<()> {
    for field in FIELD_ORDER {
        writeln!(out, "{:<18} {}", field.key(), editor::label(field)).map_err(out_err)?;
    }
    Ok(())
}
