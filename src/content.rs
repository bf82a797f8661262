// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Per-locale content: projects, socials and translation dictionaries
//!
//! The content directory is laid out as:
//!
//! ```text
//! content/
//!   projects/<locale>.json        array of projects
//!   socials/<locale>.json         array of social items
//!   locales/<locale>/*.json       flat key/value dictionaries (merged)
//! ```

use crate::error::{FolioError, Result};
use crate::i18n::{Dictionary, Translator};
use crate::types::{Project, SocialItem};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Loaded content for every locale
#[derive(Debug, Clone, Default)]
pub struct Content {
    projects: BTreeMap<String, Vec<Project>>,
    socials: BTreeMap<String, Vec<SocialItem>>,
    translator: Translator,
    default: Option<String>,
}

impl Content {
    /// Empty content whose lookups fall back to `default`
    #[must_use]
    pub fn new(default: Option<&str>) -> Self {
        Self {
            projects: BTreeMap::new(),
            socials: BTreeMap::new(),
            translator: Translator::new(default.map(String::from)),
            default: default.map(String::from),
        }
    }

    /// Load everything under `dir`. A missing directory yields empty content.
    pub fn load(dir: &Path, default: Option<&str>) -> Result<Self> {
        let mut content = Self::new(default);
        if !dir.is_dir() {
            debug!("Content directory {} not found, using empty content", dir.display());
            return Ok(content);
        }

        let mut dictionaries: BTreeMap<String, Dictionary> = BTreeMap::new();

        for entry in WalkDir::new(dir).min_depth(2).max_depth(3).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable content entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            let parts: Vec<&str> = relative.iter().filter_map(|p| p.to_str()).collect();

            match parts.as_slice() {
                ["projects", file] => {
                    let locale = file.trim_end_matches(".json");
                    content.projects.insert(locale.to_string(), read_json(path)?);
                }
                ["socials", file] => {
                    let locale = file.trim_end_matches(".json");
                    content.socials.insert(locale.to_string(), read_json(path)?);
                }
                ["locales", locale, _] => {
                    let dictionary: Dictionary = read_json(path)?;
                    dictionaries
                        .entry((*locale).to_string())
                        .or_default()
                        .extend(dictionary);
                }
                _ => debug!("Ignoring content file {}", path.display()),
            }
        }

        for (locale, dictionary) in dictionaries {
            content.translator.insert(locale, dictionary);
        }

        debug!(
            "Loaded content: {} project lists, {} social lists",
            content.projects.len(),
            content.socials.len()
        );
        Ok(content)
    }

    /// Replace the projects of a locale
    pub fn set_projects(&mut self, locale: impl Into<String>, projects: Vec<Project>) {
        self.projects.insert(locale.into(), projects);
    }

    /// Replace the social items of a locale
    pub fn set_socials(&mut self, locale: impl Into<String>, socials: Vec<SocialItem>) {
        self.socials.insert(locale.into(), socials);
    }

    /// Projects for `locale`, falling back to the default locale
    #[must_use]
    pub fn projects(&self, locale: &str) -> &[Project] {
        self.with_fallback(&self.projects, locale)
    }

    /// Social items for `locale`, falling back to the default locale
    #[must_use]
    pub fn socials(&self, locale: &str) -> &[SocialItem] {
        self.with_fallback(&self.socials, locale)
    }

    /// Translation lookup
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Mutable translation lookup, for registering dictionaries
    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    fn with_fallback<'a, T>(&self, map: &'a BTreeMap<String, Vec<T>>, locale: &str) -> &'a [T] {
        map.get(locale)
            .or_else(|| self.default.as_ref().and_then(|d| map.get(d)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| FolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FolioError::Json {
        path: path.to_path_buf(),
        source,
    })
}
