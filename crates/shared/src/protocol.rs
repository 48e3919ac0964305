use serde::{Deserialize, Serialize};

/// Commands the widget/event layer sends into the shell core. A closed set:
/// unrecognized input must be rejected at the boundary instead of falling
/// through a string-matched default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum ShellCommand {
    ChangePage { target: String },
    ToggleSwitch { switch_status: bool },
}

/// Notifications emitted by the navigation controller for the auxiliary
/// panel coordinator and any other observer the host wires up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ShellEvent {
    ViewChanged { target: String },
}
