// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Folio library - bilingual portfolio site toolkit
//!
//! This crate provides the pieces of a personal portfolio site that carry
//! real logic: the SEO metadata builder (canonical URLs, hreflang alternates,
//! Open Graph, Twitter cards and the JSON-LD graph) and the interactive
//! "flag" tile grid with its colour-matching puzzle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod flag;
pub mod i18n;
pub mod seo;
pub mod site;
pub mod theme;
pub mod tui;

/// Core data types shared by the site file, content files and the builders
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    // =========================================================================
    // Site Metadata
    // =========================================================================

    /// Social handles of the site owner
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Social {
        /// Twitter/X handle, with or without the leading `@`
        pub twitter: Option<String>,
        /// GitHub user name
        pub github: Option<String>,
        /// LinkedIn profile slug (the part after `/in/`)
        pub linkedin: Option<String>,
        /// Contact email address
        pub email: Option<String>,
    }

    impl Social {
        /// Twitter handle without any leading `@`
        #[must_use]
        pub fn twitter_handle(&self) -> Option<&str> {
            self.twitter
                .as_deref()
                .map(|t| t.trim_start_matches('@'))
                .filter(|t| !t.is_empty())
        }

        /// Profile URLs for every handle that is set, in a stable order
        #[must_use]
        pub fn profile_urls(&self) -> Vec<String> {
            let mut urls = Vec::new();
            if let Some(handle) = self.twitter_handle() {
                urls.push(format!("https://twitter.com/{handle}"));
            }
            if let Some(github) = non_empty(self.github.as_deref()) {
                urls.push(format!("https://github.com/{github}"));
            }
            if let Some(linkedin) = non_empty(self.linkedin.as_deref()) {
                urls.push(format!("https://www.linkedin.com/in/{linkedin}/"));
            }
            if let Some(mailto) = self.mailto() {
                urls.push(mailto);
            }
            urls
        }

        /// `mailto:` link for the contact email
        #[must_use]
        pub fn mailto(&self) -> Option<String> {
            non_empty(self.email.as_deref()).map(|e| format!("mailto:{e}"))
        }
    }

    /// An institution the site owner studied at
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Alumnus {
        /// Institution name
        pub name: String,
        /// Institution homepage
        #[serde(default)]
        pub url: Option<String>,
    }

    /// Person profile used for the JSON-LD Person node
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Person {
        /// Full display name, e.g. with post-nominals
        pub full_name: Option<String>,
        /// Given name
        pub given_name: Option<String>,
        /// Family name
        pub family_name: Option<String>,
        /// Nickname or alternate name
        pub alternate_name: Option<String>,
        /// Job title
        pub job_title: Option<String>,
        /// Alma maters
        pub alumni_of: Vec<Alumnus>,
    }

    /// Immutable site-wide metadata
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SiteMetadata {
        /// Site title, also the fallback page title
        pub title: String,
        /// Site description, the fallback page description
        pub description: Option<String>,
        /// Canonical base URL, e.g. `https://example.com`
        pub site_url: String,
        /// Author name
        pub author: Option<String>,
        /// Default share image (path or absolute URL)
        pub image: Option<String>,
        /// Social handles
        pub social: Social,
        /// Person profile
        pub person: Person,
    }

    impl SiteMetadata {
        /// Base URL with trailing slashes removed
        #[must_use]
        pub fn base_url(&self) -> &str {
            self.site_url.trim_end_matches('/')
        }

        /// Name used for the Person node and project authorship
        #[must_use]
        pub fn person_name(&self) -> &str {
            non_empty(self.person.full_name.as_deref())
                .or_else(|| non_empty(self.author.as_deref()))
                .unwrap_or(&self.title)
        }
    }

    // =========================================================================
    // Locale and SEO Settings
    // =========================================================================

    /// `[i18n]` section of the site file
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct LocaleConfig {
        /// Supported locale codes, in display order
        pub locales: Vec<String>,
        /// Default locale; must be one of `locales` to be honoured
        pub default: Option<String>,
    }

    impl Default for LocaleConfig {
        fn default() -> Self {
            Self {
                locales: vec!["en".into(), "ga".into()],
                default: Some("en".into()),
            }
        }
    }

    /// `[seo]` section of the site file: defaults the builder falls back to
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SeoDefaults {
        /// Share image used when neither the page nor the site sets one
        pub fallback_image: String,
        /// `programmingLanguage` for projects that do not declare one
        pub default_language: String,
        /// Separator between page title and site title
        pub title_separator: String,
        /// Locale code to Open Graph locale tag overrides
        pub og_locales: BTreeMap<String, String>,
        /// Locale code to language name overrides (`knowsLanguage`)
        pub language_names: BTreeMap<String, String>,
    }

    impl Default for SeoDefaults {
        fn default() -> Self {
            Self {
                fallback_image: "/images/og-card.png".into(),
                default_language: "TypeScript".into(),
                title_separator: " — ".into(),
                og_locales: BTreeMap::new(),
                language_names: BTreeMap::new(),
            }
        }
    }

    /// The whole site file (`site.toml`)
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SiteConfig {
        /// Site metadata at the top level of the file
        #[serde(flatten)]
        pub site: SiteMetadata,
        /// Locale settings
        pub i18n: LocaleConfig,
        /// SEO defaults
        pub seo: SeoDefaults,
        /// Unprefixed page paths to export
        pub pages: Vec<String>,
    }

    // =========================================================================
    // Content Records
    // =========================================================================

    /// A labelled link attached to a project
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProjectLink {
        /// Button label
        pub label: String,
        /// Target URL
        pub url: String,
    }

    /// A portfolio project
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Project {
        /// Stable identifier shared across locales
        pub slug: String,
        /// Display title
        pub title: String,
        /// Short description
        pub description: String,
        /// Icon path or absolute URL
        pub icon: String,
        /// Optional screenshot path
        pub screenshot: Option<String>,
        /// Related links
        pub links: Vec<ProjectLink>,
        /// Source repository URL
        pub repo: Option<String>,
        /// Live homepage URL
        pub homepage: Option<String>,
        /// Main programming language
        pub language: Option<String>,
        /// SPDX license identifier
        pub license: Option<String>,
    }

    /// A social/contact entry shown on the page
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SocialItem {
        /// Display title
        pub title: String,
        /// Call to action label
        #[serde(default)]
        pub cta: Option<String>,
        /// Target URL
        pub url: String,
        /// Icon path
        #[serde(default)]
        pub icon: Option<String>,
    }

    pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::FolioError;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
