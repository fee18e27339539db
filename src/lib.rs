//! Hardware configurator
//!
//! Edits the configuration record of a truck weighing/telemetry unit and
//! stores it as the compact binary file the unit reads at boot.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types: the record, its field catalog, errors
//! - `codec/` - Binary file format (pure functions, no I/O)
//! - `ports/` - Trait definitions for storage and the file dialog
//! - `adapters/` - Implementations of ports (filesystem, in-memory, preset dialog)
//! - `editor` - Editing rules of the configuration form
//! - `session` - New / Open / Save lifecycle around one record
//! - `menu` - File menu actions and shortcuts
//! - `commands/` - Command-line driver (driving adapter)

// Core domain (pure, no I/O)
pub mod codec;
pub mod domain;
pub mod editor;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Front-end integration
pub mod commands;
pub mod menu;
pub mod session;

use std::io::Write;

use adapters::fs_storage::FsStorage;
use domain::ConfiguratorError;

/// Run the command line and return the process exit code.
pub fn run(args: &[String]) -> i32 {
    let result = commands::parse(args).and_then(|command| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        commands::execute(command, &mut FsStorage, &mut out)
    });

    match result {
        Ok(()) => 0,
        Err(ConfiguratorError::Usage(message)) => {
            let _ = writeln!(std::io::stderr(), "error: {message}\n\n{}", commands::USAGE);
            2
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            let _ = writeln!(std::io::stderr(), "error: {e}");
            1
        }
    }
}
