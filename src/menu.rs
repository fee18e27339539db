//! File menu
//!
//! The "Fichier" menu of the configurator and its keyboard shortcuts. A front
//! end turns a menu click or key chord into a `MenuAction` and hands it to
//! `dispatch`, which drives the session.

use std::path::PathBuf;

use crate::domain::ConfiguratorResult;
use crate::ports::{ConfigStorage, FileDialog};
use crate::session::EditorSession;

/// Title of the menu
pub const FILE_MENU_LABEL: &str = "Fichier";

/// Entries of the file menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    Save,
    Quit,
}

impl MenuAction {
    /// Entries in menu order. A separator goes before `Quit`.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::New,
        MenuAction::Open,
        MenuAction::Save,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::New => "Nouveau",
            MenuAction::Open => "Ouvrir",
            MenuAction::Save => "Sauvegarder",
            MenuAction::Quit => "Quitter",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            MenuAction::New => "Ctrl+N",
            MenuAction::Open => "Ctrl+O",
            MenuAction::Save => "Ctrl+S",
            MenuAction::Quit => "Alt+F4",
        }
    }

    /// Map a key chord to its action.
    pub fn from_shortcut(ctrl: bool, alt: bool, key: &str) -> Option<MenuAction> {
        match (ctrl, alt, key.to_ascii_uppercase().as_str()) {
            (true, false, "N") => Some(MenuAction::New),
            (true, false, "O") => Some(MenuAction::Open),
            (true, false, "S") => Some(MenuAction::Save),
            (false, true, "F4") => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

/// What happened after dispatching a menu action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The session now holds a fresh default record
    Reset,
    Opened(PathBuf),
    Saved(PathBuf),
    /// The user closed the file dialog without choosing
    Cancelled,
    /// The front end should close
    Quit,
}

/// Run `action` against `session`.
///
/// Errors are returned after the session has already logged them; the
/// session itself is unchanged on error.
pub fn dispatch(
    action: MenuAction,
    session: &mut EditorSession,
    dialog: &mut dyn FileDialog,
    storage: &mut dyn ConfigStorage,
) -> ConfiguratorResult<MenuOutcome> {
    log::debug!("Menu: {} ({})", action.label(), action.shortcut());
    let outcome = match action {
        MenuAction::New => {
            session.new_file();
            MenuOutcome::Reset
        }
        MenuAction::Open => session
            .open_file(dialog, storage)?
            .map_or(MenuOutcome::Cancelled, MenuOutcome::Opened),
        MenuAction::Save => session
            .save_file(dialog, storage)?
            .map_or(MenuOutcome::Cancelled, MenuOutcome::Saved),
        MenuAction::Quit => MenuOutcome::Quit,
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_storage::MemoryStorage;
    use crate::adapters::preset_dialog::PresetDialog;
    use std::path::Path;

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(MenuAction::from_shortcut(true, false, "n"), Some(MenuAction::New));
        assert_eq!(MenuAction::from_shortcut(true, false, "O"), Some(MenuAction::Open));
        assert_eq!(MenuAction::from_shortcut(true, false, "s"), Some(MenuAction::Save));
        assert_eq!(MenuAction::from_shortcut(false, true, "F4"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_shortcut(false, false, "S"), None);
        assert_eq!(MenuAction::from_shortcut(true, false, "Q"), None);
    }

    #[test]
    fn every_action_round_trips_through_its_shortcut() {
        for action in MenuAction::ALL {
            let (mods, key) = action.shortcut().split_once('+').unwrap();
            let found = MenuAction::from_shortcut(mods == "Ctrl", mods == "Alt", key);
            assert_eq!(found, Some(action));
        }
    }

    #[test]
    fn save_then_new_then_open() {
        let mut storage = MemoryStorage::new();
        let mut dialog = PresetDialog::answering("cfg.ini");
        dialog.push(Some("cfg.ini".into()));
        let mut session = EditorSession::new();
        session.record_mut().serial_number = 314;

        let saved = dispatch(MenuAction::Save, &mut session, &mut dialog, &mut storage).unwrap();
        assert_eq!(saved, MenuOutcome::Saved("cfg.ini".into()));
        assert!(storage.exists(Path::new("cfg.ini")));

        let reset = dispatch(MenuAction::New, &mut session, &mut dialog, &mut storage).unwrap();
        assert_eq!(reset, MenuOutcome::Reset);
        assert_eq!(session.record().serial_number, 0);

        let opened = dispatch(MenuAction::Open, &mut session, &mut dialog, &mut storage).unwrap();
        assert_eq!(opened, MenuOutcome::Opened("cfg.ini".into()));
        assert_eq!(session.record().serial_number, 314);
    }

    #[test]
    fn cancelled_dialog_and_quit() {
        let mut storage = MemoryStorage::new();
        let mut dialog = PresetDialog::cancelled();
        let mut session = EditorSession::new();
        assert_eq!(
            dispatch(MenuAction::Open, &mut session, &mut dialog, &mut storage).unwrap(),
            MenuOutcome::Cancelled
        );
        assert_eq!(
            dispatch(MenuAction::Quit, &mut session, &mut dialog, &mut storage).unwrap(),
            MenuOutcome::Quit
        );
    }
}
