//! The shell's navigable pages and always-on frames.
//!
//! These are the widget-layer stand-ins behind the core's `View`/`Panel`
//! seams: each page caches the profile section it displays and reports
//! lifecycle transitions through the log. Rendering proper is not this
//! binary's concern.

use std::collections::BTreeMap;

use shared::error::ShellError;
use shell_core::profile::{CameraSettings, CursorSettings, GestureBinding};
use shell_core::{Panel, Profile, View, ViewBinding, ViewRegistry};
use tracing::info;

pub const PAGE_HOME: &str = "page_home";
pub const PAGE_CAMERA: &str = "page_camera";
pub const PAGE_CURSOR: &str = "page_cursor";
pub const PAGE_GESTURES: &str = "page_gestures";
pub const PAGE_KEYBOARD: &str = "page_keyboard";

pub const PAGE_NAMES: [&str; 5] = [
    PAGE_HOME,
    PAGE_CAMERA,
    PAGE_CURSOR,
    PAGE_GESTURES,
    PAGE_KEYBOARD,
];

/// Landing page; no profile-dependent state.
pub struct HomePage;

impl View for HomePage {
    fn enter(&mut self) {
        info!("home page shown");
    }

    fn leave(&mut self) {
        info!("home page hidden");
    }
}

pub struct CameraPage {
    pub camera: CameraSettings,
}

impl CameraPage {
    pub fn new(profile: &Profile) -> Self {
        Self {
            camera: profile.camera.clone(),
        }
    }
}

impl View for CameraPage {
    fn enter(&mut self) {
        info!(
            device_index = self.camera.device_index,
            flip_horizontal = self.camera.flip_horizontal,
            "camera page shown"
        );
    }

    fn leave(&mut self) {
        info!("camera page hidden");
    }

    fn refresh_profile(&mut self, profile: &Profile) {
        self.camera = profile.camera.clone();
        info!(device_index = self.camera.device_index, "camera page refreshed");
    }
}

pub struct CursorPage {
    pub cursor: CursorSettings,
}

impl CursorPage {
    pub fn new(profile: &Profile) -> Self {
        Self {
            cursor: profile.cursor.clone(),
        }
    }
}

impl View for CursorPage {
    fn enter(&mut self) {
        info!(
            smoothing = self.cursor.smoothing,
            hold_to_click_ms = self.cursor.hold_to_click_ms,
            "cursor page shown"
        );
    }

    fn leave(&mut self) {
        info!("cursor page hidden");
    }

    fn refresh_profile(&mut self, profile: &Profile) {
        self.cursor = profile.cursor.clone();
        info!(smoothing = self.cursor.smoothing, "cursor page refreshed");
    }
}

pub struct GesturesPage {
    pub bindings: BTreeMap<String, GestureBinding>,
}

impl GesturesPage {
    pub fn new(profile: &Profile) -> Self {
        Self {
            bindings: profile.gestures.clone(),
        }
    }
}

impl View for GesturesPage {
    fn enter(&mut self) {
        info!(bindings = self.bindings.len(), "gestures page shown");
    }

    fn leave(&mut self) {
        info!("gestures page hidden");
    }

    fn refresh_profile(&mut self, profile: &Profile) {
        self.bindings = profile.gestures.clone();
        info!(bindings = self.bindings.len(), "gestures page refreshed");
    }
}

pub struct KeyboardPage {
    pub bindings: BTreeMap<String, String>,
}

impl KeyboardPage {
    pub fn new(profile: &Profile) -> Self {
        Self {
            bindings: profile.keyboard.clone(),
        }
    }
}

impl View for KeyboardPage {
    fn enter(&mut self) {
        info!(bindings = self.bindings.len(), "keyboard page shown");
    }

    fn leave(&mut self) {
        info!("keyboard page hidden");
    }

    fn refresh_profile(&mut self, profile: &Profile) {
        self.bindings = profile.keyboard.clone();
        info!(bindings = self.bindings.len(), "keyboard page refreshed");
    }
}

/// Navigation menu frame; mirrors the active view name.
pub struct MenuFrame {
    pub active_tab: Option<String>,
}

impl MenuFrame {
    pub fn new() -> Self {
        Self { active_tab: None }
    }
}

impl Default for MenuFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for MenuFrame {
    fn enter(&mut self) {
        info!("menu frame shown");
    }

    fn leave(&mut self) {
        info!("menu frame hidden");
    }

    fn highlight(&mut self, target: &str) {
        self.active_tab = Some(target.to_string());
        info!(tab = target, "menu tab highlighted");
    }
}

/// Live camera preview frame. Frame delivery belongs to the external
/// worker; show/hide must not wait on it.
pub struct PreviewFrame;

impl Panel for PreviewFrame {
    fn enter(&mut self) {
        info!("camera preview shown");
    }

    fn leave(&mut self) {
        info!("camera preview hidden");
    }
}

/// Build the fixed view set in registration order, with the configuration
/// pages bound to profile changes.
pub fn build_registry(profile: &Profile) -> Result<ViewRegistry, ShellError> {
    let mut registry = ViewRegistry::new();
    registry.register(PAGE_HOME, Box::new(HomePage), ViewBinding::Static)?;
    registry.register(
        PAGE_CAMERA,
        Box::new(CameraPage::new(profile)),
        ViewBinding::ProfileBound,
    )?;
    registry.register(
        PAGE_CURSOR,
        Box::new(CursorPage::new(profile)),
        ViewBinding::ProfileBound,
    )?;
    registry.register(
        PAGE_GESTURES,
        Box::new(GesturesPage::new(profile)),
        ViewBinding::ProfileBound,
    )?;
    registry.register(
        PAGE_KEYBOARD,
        Box::new(KeyboardPage::new(profile)),
        ViewBinding::ProfileBound,
    )?;
    Ok(registry)
}
