//! Command-line driver
//!
//! Parses `configurator <command> [args]` and runs it against a
//! `ConfigStorage`. Output goes to any `io::Write` so the commands can be
//! exercised in tests without a terminal.

pub mod edit;
pub mod file;

use std::io::Write;
use std::path::PathBuf;

use crate::domain::{ConfiguratorError, ConfiguratorResult, Field};
use crate::ports::ConfigStorage;

pub const USAGE: &str = "\
usage: configurator <command> [args]

commands:
  new <file>                       write a default configuration
  show <file>                      print every field of a configuration
  set <file> <field>=<value>...    edit fields in place
  export <file> [json-file]        print (or write) the configuration as JSON
  import <json-file> <file>        write a configuration from JSON
  fields                           list field names accepted by `set`";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New { path: PathBuf },
    Show { path: PathBuf },
    Set { path: PathBuf, assignments: Vec<(Field, String)> },
    Export { path: PathBuf, json: Option<PathBuf> },
    Import { json: PathBuf, path: PathBuf },
    Fields,
    Help,
}

fn usage(message: impl Into<String>) -> ConfiguratorError {
    ConfiguratorError::Usage(message.into())
}

/// Parse the arguments following the program name.
pub fn parse(args: &[String]) -> ConfiguratorResult<Command> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    match (command.as_str(), rest.as_slice()) {
        ("new", [path]) => Ok(Command::New { path: path.into() }),
        ("show", [path]) => Ok(Command::Show { path: path.into() }),
        ("set", [path, assignments @ ..]) if !assignments.is_empty() => {
            let assignments = assignments
                .iter()
                .map(|a| parse_assignment(a))
                .collect::<ConfiguratorResult<Vec<_>>>()?;
            Ok(Command::Set {
                path: path.into(),
                assignments,
            })
        }
        ("export", [path]) => Ok(Command::Export {
            path: path.into(),
            json: None,
        }),
        ("export", [path, json]) => Ok(Command::Export {
            path: path.into(),
            json: Some(json.into()),
        }),
        ("import", [json, path]) => Ok(Command::Import {
            json: json.into(),
            path: path.into(),
        }),
        ("fields", []) => Ok(Command::Fields),
        ("help" | "-h" | "--help", _) => Ok(Command::Help),
        (other, _) => Err(usage(format!("unknown command or wrong arguments: '{other}'"))),
    }
}

/// Split `key=value` and resolve the key against the field catalog.
fn parse_assignment(text: &str) -> ConfiguratorResult<(Field, String)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| usage(format!("expected <field>=<value>, got '{text}'")))?;
    let field = Field::from_key(key)
        .ok_or_else(|| usage(format!("unknown field '{key}' (see `configurator fields`)")))?;
    Ok((field, value.to_string()))
}

pub(crate) fn out_err(e: std::io::Error) -> ConfiguratorError {
    ConfiguratorError::Storage(format!("Unable to write output: {e}"))
}

/// Run a parsed command.
pub fn execute(
    command: Command,
    storage: &mut dyn ConfigStorage,
    out: &mut dyn Write,
) -> ConfiguratorResult<()> {
    match command {
        Command::New { path } => file::new_config(storage, &path, out),
        Command::Show { path } => file::show_config(storage, &path, out),
        Command::Set { path, assignments } => edit::set_fields(storage, &path, &assignments, out),
        Command::Export { path, json } => file::export_config(storage, &path, json.as_deref(), out),
        Command::Import { json, path } => file::import_config(storage, &json, &path, out),
        Command::Fields => file::list_fields(out),
        Command::Help => writeln!(out, "{USAGE}").map_err(out_err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_help() {
        assert_eq!(parse(&[]).unwrap(), Command::Help);
        assert_eq!(parse(&args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn parses_file_commands() {
        assert_eq!(
            parse(&args(&["new", "a.ini"])).unwrap(),
            Command::New { path: "a.ini".into() }
        );
        assert_eq!(
            parse(&args(&["export", "a.ini", "a.json"])).unwrap(),
            Command::Export {
                path: "a.ini".into(),
                json: Some("a.json".into())
            }
        );
        assert_eq!(
            parse(&args(&["import", "a.json", "a.ini"])).unwrap(),
            Command::Import {
                json: "a.json".into(),
                path: "a.ini".into()
            }
        );
    }

    #[test]
    fn parses_set_assignments() {
        let cmd = parse(&args(&["set", "a.ini", "serial=42", "line-a=1+3", "name="])).unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                path: "a.ini".into(),
                assignments: vec![
                    (Field::SerialNumber, "42".into()),
                    (Field::Line(Line::A), "1+3".into()),
                    (Field::DeviceName, String::new()),
                ]
            }
        );
    }

    #[test]
    fn rejects_bad_command_lines() {
        assert!(matches!(
            parse(&args(&["frobnicate"])),
            Err(ConfiguratorError::Usage(_))
        ));
        assert!(parse(&args(&["new"])).is_err());
        assert!(parse(&args(&["set", "a.ini"])).is_err());
        assert!(parse(&args(&["set", "a.ini", "serial"])).is_err());
        assert!(parse(&args(&["set", "a.ini", "colour=red"])).is_err());
    }
}
