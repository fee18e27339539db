//! Edit command — apply `field=value` assignments to a file in place

use std::io::Write;
use std::path::Path;

use crate::domain::{ConfiguratorResult, Field};
use crate::editor;
use crate::ports::ConfigStorage;
use crate::session::EditorSession;

use super::out_err;

/// Open `path`, apply every assignment with the form's rules, save in place.
///
/// Assignments are all applied before anything is written; if one is
/// rejected the file is left untouched. The resulting values are printed
/// only once the file has been saved.
pub fn set_fields(
    storage: &mut dyn ConfigStorage,
    path: &Path,
    assignments: &[(Field, String)],
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    let mut session = EditorSession::new();
    session.open_path(storage, path)?;

    let mut applied = Vec::with_capacity(assignments.len());
    for (field, value) in assignments {
        editor::apply(session.record_mut(), *field, value)?;
        let shown = editor::display_value(session.record(), *field);
        log::debug!("{} ← '{value}' (stored as '{shown}')", field.name());
        applied.push((editor::label(*field), shown));
    }

    session.save_to(storage, path)?;

    for (label, shown) in applied {
        writeln!(out, "{label}: {shown}").map_err(out_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_storage::MemoryStorage;
    use crate::codec;
    use crate::domain::{ConfigRecord, Line, LineAssignment};

    fn stored(storage: &MemoryStorage, path: &str) -> ConfigRecord {
        codec::decode(storage.get(Path::new(path)).unwrap()).unwrap()
    }

    #[test]
    fn set_updates_file_with_clamped_values() {
        let mut storage =
            MemoryStorage::with_file("t.ini", codec::encode(&ConfigRecord::default()));
        let assignments = vec![
            (Field::SerialNumber, "-3".to_string()),
            (Field::DeviceName, "Truck1".to_string()),
            (Field::DutyBoxSpeedLimit, "99".to_string()),
            (Field::Line(Line::A), "1+3".to_string()),
        ];
        let mut out = Vec::new();
        set_fields(&mut storage, Path::new("t.ini"), &assignments, &mut out).unwrap();

        let r = stored(&storage, "t.ini");
        assert_eq!(r.serial_number, 0);
        assert_eq!(r.device_name, "Truck1");
        assert_eq!(r.duty_box_speed_limit, 50);
        assert_eq!(r.line_assignment(Line::A), LineAssignment::new(1, 3));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Limite de Vitesse: 50"));
        assert!(text.contains("Ligne A: c1+c3"));
    }

    #[test]
    fn rejected_assignment_leaves_file_untouched() {
        let original = codec::encode(&ConfigRecord::default());
        let mut storage = MemoryStorage::with_file("t.ini", original.clone());
        let assignments = vec![
            (Field::SerialNumber, "12".to_string()),
            (Field::SamplesToTake, "5".to_string()),
        ];
        let mut out = Vec::new();
        assert!(set_fields(&mut storage, Path::new("t.ini"), &assignments, &mut out).is_err());
        assert_eq!(storage.get(Path::new("t.ini")), Some(original.as_slice()));
        assert!(out.is_empty());
    }

    #[test]
    fn failed_save_prints_nothing() {
        let original = codec::encode(&ConfigRecord::default());
        let mut storage = MemoryStorage::with_file("t.ini", original.clone());
        storage.set_read_only(true);
        let assignments = vec![(Field::SerialNumber, "12".to_string())];
        let mut out = Vec::new();
        assert!(set_fields(&mut storage, Path::new("t.ini"), &assignments, &mut out).is_err());
        assert!(out.is_empty());
        assert_eq!(storage.get(Path::new("t.ini")), Some(original.as_slice()));
    }

    #[test]
    fn set_on_truncated_file_fails() {
        let bytes = codec::encode(&ConfigRecord::default());
        let mut storage = MemoryStorage::with_file("t.ini", bytes[..10].to_vec());
        let mut out = Vec::new();
        let assignments = vec![(Field::LoraEnabled, "1".to_string())];
        assert!(set_fields(&mut storage, Path::new("t.ini"), &assignments, &mut out).is_err());
        assert_eq!(storage.get(Path::new("t.ini")), Some(&bytes[..10]));
    }
}
