// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! SEO metadata builder
//!
//! Pure functions from the [`Site`] context, a [`PageContext`] and an
//! optional project list to [`PageMeta`]: title, description, canonical
//! URL, hreflang alternates, Open Graph and Twitter fields and a JSON-LD
//! graph. Nothing here fails; optional inputs that are missing are simply
//! left out of the output.

pub mod head;
pub mod jsonld;
pub mod url;

use crate::i18n::{og_locale, LocaleSet};
use crate::site::Site;
use crate::types::{non_empty, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use jsonld::JsonLd;
pub use url::{absolute_url, canonical_url, normalize_path};

/// hreflang value marking the fallback alternate
pub const X_DEFAULT: &str = "x-default";

/// An hreflang alternate link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    /// Absolute URL of the localized page
    pub href: String,
    /// Locale code or `x-default`
    pub hreflang: String,
}

/// Open Graph page type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// `website`
    #[default]
    Website,
    /// `article`
    Article,
}

impl PageKind {
    /// The `og:type` value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "website" => Ok(Self::Website),
            "article" => Ok(Self::Article),
            other => Err(format!("unknown page type: {other} (expected website or article)")),
        }
    }
}

/// Per-page inputs to the builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    /// Current path, possibly locale-prefixed
    pub path: String,
    /// Current locale code
    pub locale: String,
    /// Page title, combined with the site title
    pub title: Option<String>,
    /// Page description override
    pub description: Option<String>,
    /// Share image override (path or absolute URL)
    pub image: Option<String>,
    /// Open Graph type
    pub kind: PageKind,
    /// Ask crawlers not to index
    pub noindex: bool,
    /// Explicit alternates; computed from the locale set when empty
    pub alternates: Vec<AlternateLink>,
    /// Extra JSON-LD fragments appended to the graph
    pub json_ld: Vec<Value>,
}

impl PageContext {
    /// Page at `path` rendered in `locale`
    #[must_use]
    pub fn new(path: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Page for the unprefixed `original_path` localized to `locale`
    #[must_use]
    pub fn localized(locales: &LocaleSet, locale: &str, original_path: &str) -> Self {
        Self::new(locales.path_with_lang(locale, original_path), locale)
    }

    /// Set the page title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description override
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image override
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Append a JSON-LD fragment; an array contributes each of its elements
    #[must_use]
    pub fn with_json_ld(mut self, fragment: Value) -> Self {
        match fragment {
            Value::Array(items) => self.json_ld.extend(items),
            Value::Null => {}
            other => self.json_ld.push(other),
        }
        self
    }
}

/// Open Graph fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    /// `og:title`
    pub title: String,
    /// `og:description`
    pub description: Option<String>,
    /// `og:type`
    #[serde(rename = "type")]
    pub kind: PageKind,
    /// `og:url`
    pub url: String,
    /// `og:site_name`
    pub site_name: String,
    /// `og:image`
    pub image: String,
    /// `og:image:alt`
    pub image_alt: Option<String>,
    /// `og:locale`
    pub locale: String,
    /// `og:locale:alternate`, current locale excluded
    pub alternate_locales: Vec<String>,
}

/// Twitter card fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    /// `twitter:card`
    pub card: String,
    /// `twitter:site`
    pub site: Option<String>,
    /// `twitter:creator`
    pub creator: Option<String>,
    /// `twitter:title`
    pub title: String,
    /// `twitter:description`
    pub description: Option<String>,
    /// `twitter:image`
    pub image: String,
}

/// Everything a page's `<head>` needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    /// Document language
    pub lang: String,
    /// `<title>`
    pub title: String,
    /// Meta description
    pub description: Option<String>,
    /// Robots directive
    pub robots: String,
    /// Canonical URL
    pub canonical: String,
    /// hreflang alternates
    pub alternates: Vec<AlternateLink>,
    /// Open Graph
    pub open_graph: OpenGraph,
    /// Twitter card
    pub twitter: TwitterCard,
    /// JSON-LD document
    pub json_ld: JsonLd,
}

/// Alternates for every supported locale plus `x-default` for the default
/// locale. `original_path` must not carry a locale prefix.
#[must_use]
pub fn alternate_links(base: &str, locales: &LocaleSet, original_path: &str) -> Vec<AlternateLink> {
    let base = base.trim_end_matches('/');
    let path = normalize_path(original_path);
    let href = |lang: &str| format!("{base}/{lang}{path}");

    let mut links: Vec<AlternateLink> = locales
        .locales()
        .iter()
        .map(|lang| AlternateLink {
            href: href(lang),
            hreflang: lang.clone(),
        })
        .collect();

    if let Some(default) = locales.default_locale() {
        links.push(AlternateLink {
            href: href(default),
            hreflang: X_DEFAULT.into(),
        });
    }
    links
}

/// Build the metadata for one page
#[must_use]
pub fn build(site: &Site, page: &PageContext, projects: &[Project]) -> PageMeta {
    let meta = site.metadata();
    let seo = site.seo();
    let base = site.base_url();

    let title = match non_empty(page.title.as_deref()) {
        Some(t) => format!("{t}{}{}", seo.title_separator, meta.title),
        None => meta.title.clone(),
    };
    let description = non_empty(page.description.as_deref())
        .or_else(|| non_empty(meta.description.as_deref()))
        .map(String::from);

    let canonical = canonical_url(base, &page.path);
    let alternates = if page.alternates.is_empty() {
        let original = site.locales().strip_lang_from_path(&page.path);
        alternate_links(base, site.locales(), &original)
    } else {
        page.alternates.clone()
    };

    let image_path = non_empty(page.image.as_deref())
        .or_else(|| non_empty(meta.image.as_deref()))
        .unwrap_or(seo.fallback_image.as_str());
    let image = absolute_url(base, image_path);

    let twitter_handle = meta.social.twitter_handle().map(|h| format!("@{h}"));

    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        kind: page.kind,
        url: canonical.clone(),
        site_name: meta.title.clone(),
        image: image.clone(),
        image_alt: description.clone(),
        locale: og_locale(&page.locale, &seo.og_locales),
        alternate_locales: site
            .locales()
            .locales()
            .iter()
            .filter(|lang| **lang != page.locale)
            .map(|lang| og_locale(lang, &seo.og_locales))
            .collect(),
    };

    let twitter = TwitterCard {
        card: "summary_large_image".into(),
        site: twitter_handle.clone(),
        creator: twitter_handle,
        title: title.clone(),
        description: description.clone(),
        image: image.clone(),
    };

    let json_ld = jsonld::build_graph(site, &canonical, &image, projects, &page.json_ld);

    tracing::debug!("Built metadata for {} ({})", canonical, page.locale);

    PageMeta {
        lang: page.locale.clone(),
        title,
        description,
        robots: if page.noindex { "noindex,nofollow" } else { "index,follow" }.into(),
        canonical,
        alternates,
        open_graph,
        twitter,
        json_ld,
    }
}
