//! File dialog adapter that answers with a path chosen in advance.
//!
//! Used wherever there is no native dialog: the command line passes the
//! paths it was given, tests script the user's choices (including cancel).

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::ports::{DialogMode, FileDialog, FileFilter};

#[derive(Debug, Default, Clone)]
pub struct PresetDialog {
    answers: VecDeque<Option<PathBuf>>,
    asked: Vec<DialogMode>,
}

impl PresetDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dialog whose next answer is `path`.
    pub fn answering(path: impl Into<PathBuf>) -> Self {
        let mut dialog = Self::new();
        dialog.push(Some(path.into()));
        dialog
    }

    /// A dialog the user cancels.
    pub fn cancelled() -> Self {
        let mut dialog = Self::new();
        dialog.push(None);
        dialog
    }

    /// Queue another answer. `None` is a cancel.
    pub fn push(&mut self, answer: Option<PathBuf>) {
        self.answers.push_back(answer);
    }

    /// Modes the dialog was opened in, oldest first.
    pub fn asked(&self) -> &[DialogMode] {
        &self.asked
    }
}

impl FileDialog for PresetDialog {
    fn pick(&mut self, mode: DialogMode, filter: &FileFilter) -> Option<PathBuf> {
        self.asked.push(mode);
        // Running out of answers behaves like closing the dialog
        let answer = self.answers.pop_front().flatten();
        log::debug!(
            "{mode:?} dialog ({} *.{}) → {:?}",
            filter.description,
            filter.extension,
            answer
        );
        answer
    }
}
