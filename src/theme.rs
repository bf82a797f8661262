// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Light/dark theme preference and its persistence

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Key the preference is stored under
pub const PREFERENCE_KEY: &str = "theme-preference";

/// File name of the preference store inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Theme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the system colour scheme
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ThemeMode {
    /// Toggle order: system → light → dark → system
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Whether the effective scheme is dark
    #[must_use]
    pub fn resolved_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::System => system_prefers_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(FolioError::UnknownThemeMode(s.to_string())),
        }
    }
}

/// JSON key/value store holding the theme preference
///
/// The file is read once on open and rewritten on every change. Other keys
/// in the file are preserved.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl PreferenceStore {
    /// Open the store in `data_dir`; a missing file is an empty store
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(PREFERENCES_FILE);
        let values = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| FolioError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| FolioError::Json {
                path: path.clone(),
                source,
            })?
        } else {
            Map::new()
        };
        Ok(Self { path, values })
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored mode; absent or unreadable values mean `System`
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.values
            .get(PREFERENCE_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Store `mode`; `System` removes the key
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        match mode {
            ThemeMode::System => {
                self.values.remove(PREFERENCE_KEY);
            }
            other => {
                self.values
                    .insert(PREFERENCE_KEY.to_string(), Value::String(other.as_str().to_string()));
            }
        }
        self.save()?;
        tracing::debug!("Theme preference set to {}", mode);
        Ok(())
    }

    /// Advance to the next mode and persist it
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.theme().next();
        self.set_theme(next)?;
        Ok(next)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| FolioError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values).map_err(|source| FolioError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| FolioError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cycle() {
        assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::System);
    }

    #[test]
    fn test_resolution() {
        assert!(ThemeMode::System.resolved_dark(true));
        assert!(!ThemeMode::System.resolved_dark(false));
        assert!(ThemeMode::Dark.resolved_dark(false));
        assert!(!ThemeMode::Light.resolved_dark(true));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(FolioError::UnknownThemeMode(_))
        ));
    }

    #[test]
    fn test_store_persists_and_clears() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path()).unwrap();
        assert_eq!(store.theme(), ThemeMode::System);

        assert_eq!(store.toggle().unwrap(), ThemeMode::Light);
        let reopened = PreferenceStore::open(dir.path()).unwrap();
        assert_eq!(reopened.theme(), ThemeMode::Light);

        store.set_theme(ThemeMode::System).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains(PREFERENCE_KEY));
    }

    #[test]
    fn test_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), r#"{"lang":"ga"}"#).unwrap();
        let mut store = PreferenceStore::open(dir.path()).unwrap();
        store.set_theme(ThemeMode::Dark).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"lang\""));
        assert!(raw.contains("\"dark\""));
    }
}
