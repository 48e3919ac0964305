use thiserror::Error;

/// Wiring defects in the shell core. Both variants indicate a programming
/// error in the host, not a user-facing runtime condition: duplicate
/// registration should abort startup, and an unknown navigation target is
/// surfaced to the event source immediately rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown view '{name}'")]
    UnknownView { name: String },
    #[error("view '{name}' is already registered")]
    DuplicateName { name: String },
}

impl ShellError {
    pub fn unknown_view(name: impl Into<String>) -> Self {
        Self::UnknownView { name: name.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
