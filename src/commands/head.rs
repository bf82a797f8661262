// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Head command - prints the `<head>` markup for one page

use super::{print_json, resolve_locale, Globals};
use crate::seo::{self, head, PageContext, PageKind, PageMeta};
use crate::site::Site;
use crate::types::Project;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Page selection shared by `head` and `jsonld`
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PageArgs {
    /// Page path, with or without a locale prefix
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Locale (defaults to the path's locale, then the site default)
    #[arg(long)]
    pub locale: Option<String>,

    /// Page title, joined to the site title
    #[arg(long)]
    pub title: Option<String>,

    /// Description override
    #[arg(long)]
    pub description: Option<String>,

    /// Share image override (path or absolute URL)
    #[arg(long)]
    pub image: Option<String>,

    /// Open Graph type (website, article)
    #[arg(long = "type", default_value = "website")]
    pub kind: PageKind,

    /// Ask crawlers not to index the page
    #[arg(long)]
    pub noindex: bool,

    /// Describe the locale's projects in the JSON-LD graph
    #[arg(long)]
    pub projects: bool,

    /// Extra JSON-LD fragment (object or array) to append
    #[arg(long)]
    pub ld: Option<PathBuf>,
}

/// Build the page context and project list named by `args`
pub fn page_context(site: &Site, args: &PageArgs) -> Result<(PageContext, Vec<Project>)> {
    let locales = site.locales();
    let requested = args.locale.as_deref().or_else(|| locales.locale_of_path(&args.path));
    let locale = resolve_locale(site, requested);
    let original = locales.strip_lang_from_path(&args.path);

    let mut page = PageContext::localized(locales, &locale, &original);
    page.title = args.title.clone();
    page.description = args.description.clone();
    page.image = args.image.clone();
    page.kind = args.kind;
    page.noindex = args.noindex;

    if let Some(path) = &args.ld {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let fragment = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse JSON-LD in {}", path.display()))?;
        page = page.with_json_ld(fragment);
    }

    let projects = if args.projects {
        site.content().projects(&locale).to_vec()
    } else {
        Vec::new()
    };
    Ok((page, projects))
}

/// Metadata for the page named by `args`
pub fn page_meta(site: &Site, args: &PageArgs) -> Result<PageMeta> {
    let (page, projects) = page_context(site, args)?;
    Ok(seo::build(site, &page, &projects))
}

/// Run the head command
pub fn run(globals: &Globals, args: &PageArgs) -> Result<()> {
    let site = globals.load_site()?;
    let meta = page_meta(&site, args)?;
    info!("Rendering head for {}", meta.canonical);

    if globals.json {
        print_json(&meta)
    } else {
        print!("{}", head::render_head(&meta));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::types::{SiteConfig, SiteMetadata};

    fn site() -> Site {
        let config = SiteConfig {
            site: SiteMetadata {
                title: "Example".into(),
                site_url: "https://example.com".into(),
                ..SiteMetadata::default()
            },
            ..SiteConfig::default()
        };
        Site::new(config, Content::default()).unwrap()
    }

    #[test]
    fn test_locale_from_path() {
        let args = PageArgs {
            path: "/ga/about".into(),
            ..PageArgs::default()
        };
        let (page, _) = page_context(&site(), &args).unwrap();
        assert_eq!(page.locale, "ga");
        assert_eq!(page.path, "/ga/about/");
    }

    #[test]
    fn test_explicit_locale_relocalizes_path() {
        let args = PageArgs {
            path: "/ga/about/".into(),
            locale: Some("en".into()),
            ..PageArgs::default()
        };
        let meta = page_meta(&site(), &args).unwrap();
        assert_eq!(meta.canonical, "https://example.com/about/");
        assert_eq!(meta.lang, "en");
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let args = PageArgs {
            path: "/".into(),
            locale: Some("fr".into()),
            ..PageArgs::default()
        };
        let (page, _) = page_context(&site(), &args).unwrap();
        assert_eq!(page.locale, "en");
    }
}
