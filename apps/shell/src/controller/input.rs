//! Line protocol of the interactive driver, parsed into typed actions.
//!
//! The driver stands in for the widget layer's event source: every line
//! becomes either a `ShellCommand` or a driver-local action. Unrecognized
//! input is an error, never a silent no-op.

use shared::protocol::ShellCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverAction {
    Shell(ShellCommand),
    SwitchProfile { name: String },
    ListProfiles,
    Status,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<DriverAction, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("empty input; type 'help' for commands".to_string());
    };
    let rest: Vec<&str> = parts.collect();

    match (verb, rest.as_slice()) {
        ("page", [target]) => Ok(DriverAction::Shell(ShellCommand::ChangePage {
            target: (*target).to_string(),
        })),
        ("toggle", [flag]) => match *flag {
            "on" => Ok(DriverAction::Shell(ShellCommand::ToggleSwitch {
                switch_status: true,
            })),
            "off" => Ok(DriverAction::Shell(ShellCommand::ToggleSwitch {
                switch_status: false,
            })),
            other => Err(format!("toggle takes 'on' or 'off', got '{other}'")),
        },
        ("profile", [name]) => Ok(DriverAction::SwitchProfile {
            name: (*name).to_string(),
        }),
        ("profiles", []) => Ok(DriverAction::ListProfiles),
        ("status", []) => Ok(DriverAction::Status),
        ("help", []) => Ok(DriverAction::Help),
        ("quit" | "exit", []) => Ok(DriverAction::Quit),
        _ => Err(format!("unrecognized command '{line}'; type 'help'")),
    }
}

pub const HELP_TEXT: &str = "\
commands:
  page <name>       switch to a view (page_home, page_camera, page_cursor,
                    page_gestures, page_keyboard)
  toggle on|off     enable/disable head-tracking pointer control
  profile <name>    switch the active profile and refresh the pages
  profiles          list profiles on disk
  status            show view, panel, and pointer state
  help              this text
  quit              leave the shell";
