//! Named configuration profiles and their on-disk store.
//!
//! A profile bundles the per-user settings the configuration pages display:
//! camera selection, cursor tuning, and gesture/keyboard bindings. Profiles
//! are stored one TOML file per name under a profiles directory the host
//! resolves. Views never reach for a process-wide profile object; the host
//! passes the loaded `Profile` into the refresh fan-out explicitly.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub device_index: u32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            flip_horizontal: true,
            flip_vertical: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    pub speed_up: f32,
    pub speed_down: f32,
    pub speed_left: f32,
    pub speed_right: f32,
    pub smoothing: f32,
    pub hold_to_click_ms: u64,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            speed_up: 10.0,
            speed_down: 10.0,
            speed_left: 10.0,
            speed_right: 10.0,
            smoothing: 0.5,
            hold_to_click_ms: 500,
        }
    }
}

/// One facial gesture mapped to a pointer action, triggered when the
/// gesture confidence crosses the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureBinding {
    pub action: String,
    pub threshold: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    // Kept first so TOML encodes the plain value before the section tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub camera: CameraSettings,
    pub cursor: CursorSettings,
    /// Facial gesture -> pointer action.
    pub gestures: BTreeMap<String, GestureBinding>,
    /// Facial gesture -> key name.
    pub keyboard: BTreeMap<String, String>,
}

impl Profile {
    /// The bindings a freshly created profile ships with.
    pub fn with_default_bindings() -> Self {
        let mut profile = Self::default();
        profile.gestures.insert(
            "mouth_open".to_string(),
            GestureBinding {
                action: "left_click".to_string(),
                threshold: 0.3,
            },
        );
        profile.gestures.insert(
            "raise_eyebrows".to_string(),
            GestureBinding {
                action: "right_click".to_string(),
                threshold: 0.6,
            },
        );
        profile
            .keyboard
            .insert("mouth_left".to_string(), "space".to_string());
        profile
    }
}

/// Disk-backed store of named profiles plus the current selection.
///
/// `set_current` returns the freshly loaded profile so the host can run the
/// refresh fan-out against it.
pub struct ProfileStore {
    dir: PathBuf,
    current: String,
}

impl ProfileStore {
    /// Open a store rooted at `dir`, creating the directory and seeding the
    /// current profile with default bindings if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>, current: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        let current = current.into();
        validate_name(&current)?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create profiles directory '{}'", dir.display()))?;

        let store = Self { dir, current };
        if !store.path_of(&store.current).exists() {
            info!(profile = %store.current, "seeding missing profile with defaults");
            store.save(&store.current, &Profile::with_default_bindings())?;
        }
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Profile names present on disk, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read profiles directory '{}'", self.dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<Profile> {
        validate_name(name)?;
        let path = self.path_of(name);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read profile '{name}' at '{}'", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("profile '{name}' is not valid TOML"))
    }

    /// Persist a profile under `name`, stamping the write time.
    pub fn save(&self, name: &str, profile: &Profile) -> Result<()> {
        validate_name(name)?;
        let mut stored = profile.clone();
        stored.updated_at = Some(Utc::now());
        let raw = toml::to_string(&stored).context("failed to encode profile")?;
        let path = self.path_of(name);
        fs::write(&path, raw)
            .with_context(|| format!("failed to write profile '{name}' at '{}'", path.display()))?;
        Ok(())
    }

    /// Switch the current profile and return its contents for the refresh
    /// fan-out.
    pub fn set_current(&mut self, name: &str) -> Result<Profile> {
        let profile = self.load(name)?;
        info!(from = %self.current, to = name, "profile switched");
        self.current = name.to_string();
        Ok(profile)
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.toml"))
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("profile name must not be empty");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        bail!("profile name '{name}' contains unsupported characters");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod tests;
