// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings come from `folio.toml` (in the platform config directory unless
//! `--config` points elsewhere), overridden by `FOLIO_*` environment
//! variables. Nested keys use a double underscore: `FOLIO_FLAG__COLS=12`.

use crate::flag::FlagOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for persistent data (theme preference)
    pub data_dir: PathBuf,
    /// Site description file
    pub site_file: PathBuf,
    /// Per-locale content directory
    pub content_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Flag grid defaults
    pub flag: FlagOptions,
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "hyperpolymath", "folio")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("~/.local/share/folio")),
            site_file: PathBuf::from("site.toml"),
            content_dir: PathBuf::from("content"),
            log_level: "info".to_string(),
            flag: FlagOptions::default(),
        }
    }
}

/// Default location of the configuration file
#[must_use]
pub fn default_path() -> PathBuf {
    project_dirs()
        .map(|d| d.config_dir().join("folio.toml"))
        .unwrap_or_else(|| PathBuf::from("folio.toml"))
}

/// Load configuration from `path` and the environment. A missing file
/// yields the defaults.
pub fn load(path: &Path) -> Result<Config> {
    tracing::debug!("Loading configuration from {}", path.display());

    let settings = ::config::Config::builder()
        .add_source(::config::File::from(path).format(::config::FileFormat::Toml).required(false))
        .add_source(
            ::config::Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    settings
        .try_deserialize()
        .with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Look up a dotted key (`flag.cols`) in the effective configuration
pub fn get(config: &Config, key: &str) -> Result<Option<String>> {
    let value = toml::Value::try_from(config).context("Failed to serialize configuration")?;
    let mut current = &value;
    for part in key.split('.') {
        match current.get(part) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(match current {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}

/// Write a dotted key into the file at `path`, creating it if needed
pub fn set(path: &Path, key: &str, raw: &str) -> Result<()> {
    let mut table: toml::Table = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        content
            .parse()
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        toml::Table::new()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        bail!("Empty configuration key");
    };
    if last.is_empty() || parents.iter().any(|p| p.is_empty()) {
        bail!("Invalid configuration key: {}", key);
    }

    let mut current = &mut table;
    for part in parents {
        let entry = current
            .entry((*part).to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let toml::Value::Table(next) = entry else {
            bail!("{} is not a table", part);
        };
        current = next;
    }
    current.insert((*last).to_string(), parse_value(raw));

    // Reject edits that would make the file unloadable
    toml::Value::Table(table.clone())
        .try_into::<Config>()
        .with_context(|| format!("Invalid value for {}: {}", key, raw))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let rendered = toml::to_string_pretty(&table).context("Failed to serialize configuration")?;
    fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn parse_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        toml::Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        toml::Value::Float(f)
    } else {
        toml::Value::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::FlagMode;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.site_file, PathBuf::from("site.toml"));
        assert_eq!(config.flag.cols, 10);
    }

    #[test]
    fn test_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "log_level = \"debug\"\n[flag]\ncols = 6\nmode = \"puzzle\"\n").unwrap();
        let config = load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.flag.cols, 6);
        assert_eq!(config.flag.rows, 5);
        assert_eq!(config.flag.mode, FlagMode::Puzzle);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("folio.toml");
        set(&path, "flag.rows", "7").unwrap();
        set(&path, "site_file", "www/site.toml").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(get(&config, "flag.rows").unwrap().as_deref(), Some("7"));
        assert_eq!(get(&config, "site_file").unwrap().as_deref(), Some("www/site.toml"));
        assert_eq!(get(&config, "flag.nope").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_bad_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        assert!(set(&path, "flag.mode", "chess").is_err());
        assert!(!path.exists());
        assert!(set(&path, "flag..cols", "3").is_err());
    }
}
