use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "glint";
const APP_CONFIG_FILE: &str = "config.json";

/// Library-level preferences from `config.json`.
///
/// `motionEnabled` overrides animation playback globally; when unset the
/// GTK `gtk-enable-animations` setting decides (reduced-motion systems
/// turn that off).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionPrefs {
    #[serde(default)]
    pub motion_enabled: Option<bool>,
}

pub fn load_motion_prefs() -> MotionPrefs {
    let (xdg_config_home, home) = config_env_dirs();
    load_motion_prefs_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_motion_prefs_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> MotionPrefs {
    let path = match prefs_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return MotionPrefs::default(),
    };
    if !path.exists() {
        return MotionPrefs::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            MotionPrefs::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            MotionPrefs::default()
        }
    }
}

/// Effective motion flag: explicit preference first, then the GTK
/// `gtk-enable-animations` setting, then on.
pub fn motion_enabled(prefs: &MotionPrefs) -> bool {
    if let Some(enabled) = prefs.motion_enabled {
        return enabled;
    }
    gtk_animations_enabled().unwrap_or(true)
}

fn gtk_animations_enabled() -> Option<bool> {
    gtk4::Settings::default().map(|settings| settings.is_gtk_enable_animations())
}

pub fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn prefs_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_path_prefers_xdg_config_home() {
        let path = prefs_path(
            APP_DIR,
            APP_CONFIG_FILE,
            Some(Path::new("/tmp/xdg")),
            Some(Path::new("/home/user")),
        )
        .expect("xdg path should resolve");
        assert_eq!(path, PathBuf::from("/tmp/xdg/glint/config.json"));
    }

    #[test]
    fn prefs_path_falls_back_to_home_config() {
        let path = prefs_path(APP_DIR, APP_CONFIG_FILE, None, Some(Path::new("/home/user")))
            .expect("home path should resolve");
        assert_eq!(path, PathBuf::from("/home/user/.config/glint/config.json"));
    }

    #[test]
    fn prefs_path_requires_some_home() {
        let err = prefs_path(APP_DIR, APP_CONFIG_FILE, None, None)
            .expect_err("no home must be an error");
        assert_eq!(err, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn empty_xdg_value_is_ignored() {
        let path = prefs_path(
            APP_DIR,
            APP_CONFIG_FILE,
            Some(Path::new("")),
            Some(Path::new("/home/user")),
        )
        .expect("empty xdg should fall back");
        assert_eq!(path, PathBuf::from("/home/user/.config/glint/config.json"));
    }

    #[test]
    fn missing_file_and_bad_json_both_default() {
        let missing = load_motion_prefs_with(Some(Path::new("/nonexistent")), None);
        assert_eq!(missing.motion_enabled, None);

        let dir = std::env::temp_dir().join("glint-config-test");
        std::fs::create_dir_all(dir.join(APP_DIR)).expect("create temp config dir");
        std::fs::write(dir.join(APP_DIR).join(APP_CONFIG_FILE), "{not json")
            .expect("write bad config");
        let bad = load_motion_prefs_with(Some(&dir), None);
        assert_eq!(bad.motion_enabled, None);
    }

    #[test]
    fn explicit_preference_wins_over_fallback() {
        let prefs = MotionPrefs {
            motion_enabled: Some(false),
        };
        assert!(!motion_enabled(&prefs));

        let prefs = MotionPrefs {
            motion_enabled: Some(true),
        };
        assert!(motion_enabled(&prefs));
    }

    #[test]
    fn camel_case_key_parses() {
        let prefs: MotionPrefs =
            serde_json::from_str(r#"{"motionEnabled": false}"#).expect("prefs should parse");
        assert_eq!(prefs.motion_enabled, Some(false));
    }
}
