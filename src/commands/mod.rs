// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod alternates;
pub mod completions;
pub mod config;
pub mod export;
pub mod flag;
pub mod head;
pub mod jsonld;
pub mod locales;
pub mod robots;
pub mod theme;
pub mod translate;

use crate::config::Config;
use crate::site::Site;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings shared by every command, resolved from flags and configuration
#[derive(Debug, Clone)]
pub struct Globals {
    /// Effective configuration
    pub config: Config,
    /// Configuration file in use
    pub config_path: PathBuf,
    /// Emit JSON instead of human output
    pub json: bool,
    /// Colourise human output
    pub color: bool,
}

impl Globals {
    /// Load the site file and content directory named by the configuration
    pub fn load_site(&self) -> Result<Site> {
        Site::load(&self.config.site_file, &self.config.content_dir).with_context(|| {
            format!(
                "Failed to load site from {}",
                self.config.site_file.display()
            )
        })
    }
}

/// Locale to use: the requested one when supported, else the default
pub fn resolve_locale(site: &Site, requested: Option<&str>) -> String {
    if let Some(code) = requested {
        if !site.locales().contains(code) {
            tracing::warn!("Locale {} is not supported, using the default", code);
        }
    }
    site.locales().resolve(requested).unwrap_or("en").to_string()
}

/// Pretty-print a serializable value as JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
