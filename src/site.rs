// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The site context handed to every builder

use crate::content::Content;
use crate::error::{FolioError, Result};
use crate::i18n::LocaleSet;
use crate::types::{SeoDefaults, SiteConfig, SiteMetadata};
use std::fs;
use std::path::Path;
use tracing::info;

/// Site metadata, locales, SEO defaults and content, loaded once and passed
/// explicitly to whatever needs them
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    locales: LocaleSet,
    content: Content,
}

impl Site {
    /// Assemble a site context. The base URL is the only required field.
    pub fn new(config: SiteConfig, content: Content) -> Result<Self> {
        if config.site.site_url.trim().trim_end_matches('/').is_empty() {
            return Err(FolioError::MissingSiteUrl);
        }
        let locales = LocaleSet::from_config(&config.i18n);
        Ok(Self {
            config,
            locales,
            content,
        })
    }

    /// Parse a site file body
    pub fn parse_config(raw: &str, path: &Path) -> Result<SiteConfig> {
        toml::from_str(raw).map_err(|source| FolioError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the site file and the content directory
    pub fn load(site_file: &Path, content_dir: &Path) -> Result<Self> {
        let raw = fs::read_to_string(site_file).map_err(|source| FolioError::Io {
            path: site_file.to_path_buf(),
            source,
        })?;
        let config = Self::parse_config(&raw, site_file)?;
        let content = Content::load(content_dir, config.i18n.default.as_deref())?;
        let site = Self::new(config, content)?;
        info!(
            "Loaded site {} ({} locales)",
            site.base_url(),
            site.locales.locales().len()
        );
        Ok(site)
    }

    /// Site metadata
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.config.site
    }

    /// Supported locales
    #[must_use]
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// SEO defaults
    #[must_use]
    pub fn seo(&self) -> &SeoDefaults {
        &self.config.seo
    }

    /// Per-locale content
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.site.base_url()
    }

    /// Unprefixed page paths to export; the home page when none are listed
    #[must_use]
    pub fn pages(&self) -> Vec<String> {
        if self.config.pages.is_empty() {
            vec!["/".to_string()]
        } else {
            self.config.pages.clone()
        }
    }

    /// Body of `robots.txt`
    #[must_use]
    pub fn robots_txt(&self) -> String {
        format!(
            "Sitemap: {}/sitemap-index.xml\nUser-agent: *\nAllow: /",
            self.base_url()
        )
    }
}
