use std::{collections::HashMap, fs, path::{Path, PathBuf}};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Settings {
    pub profile: String,
    pub profiles_dir: Option<PathBuf>,
    pub pointer_queue_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: "default".into(),
            profiles_dir: None,
            pointer_queue_depth: 8,
        }
    }
}

pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("profile") {
                settings.profile = v.clone();
            }
            if let Some(v) = file_cfg.get("profiles_dir") {
                settings.profiles_dir = Some(PathBuf::from(v));
            }
            if let Some(v) = file_cfg.get("pointer_queue_depth") {
                if let Ok(parsed) = v.parse::<usize>() {
                    settings.pointer_queue_depth = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("HEADSHELL_PROFILE") {
        settings.profile = v;
    }
    if let Ok(v) = std::env::var("HEADSHELL_PROFILES_DIR") {
        settings.profiles_dir = Some(PathBuf::from(v));
    }
    if let Ok(v) = std::env::var("HEADSHELL_POINTER_QUEUE_DEPTH") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.pointer_queue_depth = parsed;
        }
    }

    settings
}

/// Profiles live where the settings point, falling back to the per-user
/// config directory.
pub fn resolve_profiles_dir(settings: &Settings) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &settings.profiles_dir {
        return Ok(dir.clone());
    }
    let base = dirs::config_dir().context("unable to resolve the user config directory")?;
    Ok(base.join("headshell").join("profiles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_file_yields_defaults() {
        let settings = load_settings(Path::new("/nonexistent/shell.toml"));
        assert_eq!(settings.profile, "default");
        assert_eq!(settings.pointer_queue_depth, 8);
        assert!(settings.profiles_dir.is_none());
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!(
            "headshell_settings_test_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("shell.toml");
        fs::write(
            &path,
            "profile = \"gaming\"\nprofiles_dir = \"/tmp/profiles\"\npointer_queue_depth = \"4\"\n",
        )
        .expect("write settings");

        let settings = load_settings(&path);
        assert_eq!(settings.profile, "gaming");
        assert_eq!(settings.profiles_dir.as_deref(), Some(Path::new("/tmp/profiles")));
        assert_eq!(settings.pointer_queue_depth, 4);

        fs::remove_dir_all(dir).expect("cleanup");
    }

    #[test]
    fn explicit_profiles_dir_wins_over_the_config_fallback() {
        let settings = Settings {
            profiles_dir: Some(PathBuf::from("/opt/headshell/profiles")),
            ..Settings::default()
        };
        let dir = resolve_profiles_dir(&settings).expect("resolve");
        assert_eq!(dir, PathBuf::from("/opt/headshell/profiles"));
    }
}
