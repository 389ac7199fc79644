//! Preview environment persistence
//!
//! Stored as pretty JSON at `~/.prism/studio/preferences.json`. Missing
//! fields take their defaults so older files keep loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::PreviewEnvironment;

/// Default preferences file location
pub fn preferences_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".prism").join("studio").join("preferences.json")
}

/// Read the environment saved at `path`
pub fn load_from(path: &Path) -> Result<PreviewEnvironment> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let env = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(env)
}

/// Load from `path`, falling back to defaults if the file is absent or bad
pub fn load_or_default(path: &Path) -> PreviewEnvironment {
    if !path.exists() {
        log::info!("no preferences at {}, using defaults", path.display());
        return PreviewEnvironment::default();
    }
    match load_from(path) {
        Ok(env) => {
            log::info!("loaded preferences from {}", path.display());
            env
        }
        Err(e) => {
            log::warn!("{:#}; using defaults", e);
            PreviewEnvironment::default()
        }
    }
}

/// Write `env` to `path`, creating parent directories
pub fn save_to(path: &Path, env: &PreviewEnvironment) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(env)?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("saved preferences to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_settings::{ColorScheme, LayoutDirection, Locale, TextSize};

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let env = PreviewEnvironment {
            color_scheme: ColorScheme::Dark,
            locale: Locale::from("ru"),
            text_size: TextSize::Accessibility2,
            layout_direction: LayoutDirection::RightToLeft,
            accessibility_enabled: true,
        };

        save_to(&path, &env).unwrap();
        assert_eq!(load_from(&path).unwrap(), env);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{ "locale": "fr" }"#).unwrap();

        let env = load_from(&path).unwrap();
        assert_eq!(env.locale, Locale::from("fr"));
        assert_eq!(env.color_scheme, ColorScheme::Light);
        assert_eq!(env.text_size, TextSize::Large);
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        assert!(load_from(&path).is_err());
        assert_eq!(load_or_default(&path), PreviewEnvironment::default());
    }

    #[test]
    fn test_absent_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_or_default(&dir.path().join("missing.json")),
            PreviewEnvironment::default()
        );
    }

    #[test]
    fn test_default_path() {
        assert!(preferences_path().ends_with(".prism/studio/preferences.json"));
    }
}
