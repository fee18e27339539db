//! Integration tests: editing session, menu and command line against real files
//!
//! These tests drive the same paths a front end would, through `FsStorage`
//! in a scratch directory and `PresetDialog` standing in for the native
//! file dialog.
//!
//! Run with: cargo test --test session_integration

use std::path::Path;

use configurator_lib::adapters::{FsStorage, MemoryStorage, PresetDialog};
use configurator_lib::codec;
use configurator_lib::commands::{self, Command};
use configurator_lib::domain::{
    ConfigRecord, ConfiguratorError, DecodeError, Field, Line, LineAssignment, TruckType,
};
use configurator_lib::editor;
use configurator_lib::menu::{dispatch, MenuAction, MenuOutcome};
use configurator_lib::ports::{ConfigStorage, DialogMode};
use configurator_lib::session::EditorSession;

fn run(args: &[&str], storage: &mut dyn ConfigStorage) -> Result<String, ConfiguratorError> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    commands::execute(commands::parse(&args)?, storage, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Edit in a session, save to disk, reopen in a new session: same record.
#[test]
fn edit_save_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("camion.ini");
    let mut storage = FsStorage;

    let mut session = EditorSession::new();
    {
        let record = session.record_mut();
        editor::set_serial_number(record, 42);
        editor::set_device_name(record, "Truck1");
        editor::set_line(record, Line::A, 1, 3);
        record.set_truck_type(TruckType::Train);
    }
    let mut dialog = PresetDialog::answering(&path);
    assert_eq!(
        session.save_file(&mut dialog, &mut storage).unwrap(),
        Some(path.clone())
    );
    assert_eq!(dialog.asked(), &[DialogMode::Save]);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 39);

    let mut reopened = EditorSession::new();
    reopened.open_path(&storage, &path).unwrap();
    assert_eq!(reopened.record(), session.record());
    assert_eq!(reopened.path(), Some(path.as_path()));
}

/// A file cut short on disk must not replace what the user is editing.
#[test]
fn truncated_file_on_disk_is_rejected_whole() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.ini");
    let bad = dir.path().join("bad.ini");
    let bytes = codec::encode(&ConfigRecord {
        serial_number: 7,
        device_name: "Benne".into(),
        ..ConfigRecord::default()
    });
    std::fs::write(&good, &bytes).unwrap();
    std::fs::write(&bad, &bytes[..bytes.len() / 2]).unwrap();

    let mut storage = FsStorage;
    let mut session = EditorSession::new();
    let mut dialog = PresetDialog::answering(&good);
    dialog.push(Some(bad.clone()));

    let first = dispatch(MenuAction::Open, &mut session, &mut dialog, &mut storage).unwrap();
    assert_eq!(first, MenuOutcome::Opened(good.clone()));

    let err = dispatch(MenuAction::Open, &mut session, &mut dialog, &mut storage).unwrap_err();
    assert!(matches!(
        err,
        ConfiguratorError::Decode(DecodeError::Truncated { .. })
    ));
    assert_eq!(session.record().serial_number, 7);
    assert_eq!(session.record().device_name, "Benne");
    assert_eq!(session.path(), Some(good.as_path()));
}

#[test]
fn command_line_new_set_show_export_import() {
    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("a.ini");
    let json = dir.path().join("a.json");
    let copy = dir.path().join("b.ini");
    let (ini_s, json_s, copy_s) = (
        ini.to_str().unwrap(),
        json.to_str().unwrap(),
        copy.to_str().unwrap(),
    );
    let mut storage = FsStorage;

    run(&["new", ini_s], &mut storage).unwrap();
    assert_eq!(std::fs::read(&ini).unwrap(), codec::encode(&ConfigRecord::default()));

    run(
        &["set", ini_s, "serial=42", "name=Truck1", "line-a=1+3", "log-to-file=oui"],
        &mut storage,
    )
    .unwrap();
    let record = codec::decode(&std::fs::read(&ini).unwrap()).unwrap();
    assert_eq!(record.serial_number, 42);
    assert_eq!(record.line_assignment(Line::A), LineAssignment::new(1, 3));
    assert_eq!(record.encoded_len(), 39);

    let shown = run(&["show", ini_s], &mut storage).unwrap();
    assert!(shown.contains("Truck1"));
    assert!(shown.contains("c1+c3"));

    run(&["export", ini_s, json_s], &mut storage).unwrap();
    run(&["import", json_s, copy_s], &mut storage).unwrap();
    assert_eq!(std::fs::read(&copy).unwrap(), std::fs::read(&ini).unwrap());
}

#[test]
fn command_line_reports_usage_and_read_only_fields() {
    let mut storage = MemoryStorage::with_file("a.ini", codec::encode(&ConfigRecord::default()));
    assert!(matches!(
        run(&["set", "a.ini", "bogus=1"], &mut storage),
        Err(ConfiguratorError::Usage(_))
    ));
    assert!(matches!(
        run(&["set", "a.ini", "calibration-date=21-05-03"], &mut storage),
        Err(ConfiguratorError::InvalidValue(_))
    ));
    assert!(matches!(
        run(&["show", "missing.ini"], &mut storage),
        Err(ConfiguratorError::Storage(_))
    ));
    assert_eq!(commands::parse(&[]).unwrap(), Command::Help);
    assert!(run(&["help"], &mut storage).unwrap().starts_with("usage:"));
}

#[test]
fn run_returns_exit_codes() {
    assert_eq!(configurator_lib::run(&["fields".to_string()]), 0);
    assert_eq!(configurator_lib::run(&["frobnicate".to_string()]), 2);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing.ini");
    assert_eq!(
        configurator_lib::run(&["show".to_string(), missing.display().to_string()]),
        1
    );
    assert!(!Path::new(&missing).exists());
}

#[test]
fn set_field_keys_cover_the_catalog() {
    let mut storage = MemoryStorage::with_file("a.ini", codec::encode(&ConfigRecord::default()));
    let listed = run(&["fields"], &mut storage).unwrap();
    for line in listed.lines() {
        let key = line.split_whitespace().next().unwrap();
        assert!(Field::from_key(key).is_some(), "unknown key '{key}'");
    }
}
