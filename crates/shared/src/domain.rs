use serde::{Deserialize, Serialize};

/// Always-on panels shown alongside whichever view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Menu,
    Preview,
}

impl PanelKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Preview => "preview",
        }
    }
}

/// Lifecycle state of a view or panel. Distinct from layout visibility:
/// a view can be refreshed while inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Inactive,
    Active,
}

/// Point-in-time description of one registered view, for status reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSummary {
    pub name: String,
    pub state: LifecycleState,
    pub visible: bool,
    pub profile_bound: bool,
}
