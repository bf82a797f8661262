// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Alternates command - lists the hreflang links of a page

use super::{print_json, Globals};
use crate::seo::{alternate_links, AlternateLink};
use crate::site::Site;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Alternates of `path`, which may carry a locale prefix
#[must_use]
pub fn for_path(site: &Site, path: &str) -> Vec<AlternateLink> {
    let original = site.locales().strip_lang_from_path(path);
    alternate_links(site.base_url(), site.locales(), &original)
}

/// Run the alternates command
pub fn run(globals: &Globals, path: &str) -> Result<()> {
    let site = globals.load_site()?;
    let links = for_path(&site, path);

    if globals.json {
        return print_json(&links);
    }
    for link in &links {
        if globals.color {
            println!("{:<10} {}", link.hreflang.cyan(), link.href);
        } else {
            println!("{:<10} {}", link.hreflang, link.href);
        }
    }
    Ok(())
}
