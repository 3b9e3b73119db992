// Theme management.
// Light/dark palettes, toggled at runtime and persisted across sessions in
// the application state file. A corrupt state file falls back to defaults.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
                good: Color::Green,
                warn: Color::Yellow,
                bad: Color::Red,
            },
            Theme::Dark => Palette {
                text: Color::White,
                dim: Color::Gray,
                accent: Color::Cyan,
                good: Color::LightGreen,
                warn: Color::LightYellow,
                bad: Color::LightRed,
            },
        }
    }
}

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub good: Color,
    pub warn: Color,
    pub bad: Color,
}

/// Persisted application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub theme: Theme,
}

impl AppState {
    /// Load persisted state. Missing or corrupt files yield defaults.
    pub fn load(path: Option<&Path>) -> Self {
        path.and_then(|p| fs::read_to_string(p).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Persist state, best effort, atomically via temp rename.
    pub fn save(&self, path: Option<&Path>) {
        let Some(path) = path else {
            return;
        };
        let Ok(json) = serde_json::to_string_pretty(self) else {
            return;
        };

        let _ = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let temp_path = path.with_extension("tmp");
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, path)?;
            Ok(())
        })();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_state_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        let state = AppState { theme: Theme::Dark };
        state.save(Some(&path));

        let loaded = AppState::load(Some(&path));
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test]
    fn test_corrupt_state_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();

        let loaded = AppState::load(Some(&path));
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_missing_state_falls_back() {
        let loaded = AppState::load(None);
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
