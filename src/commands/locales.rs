// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Locales command - the data behind a language switcher

use super::{print_json, Globals};
use crate::i18n::{display_name, language_name, og_locale};
use crate::site::Site;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

/// One supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
    /// Locale code
    pub code: String,
    /// Name written in the locale itself
    pub native_name: String,
    /// English language name
    pub language: String,
    /// Open Graph locale tag
    pub og_locale: String,
    /// Home page path in this locale
    pub home: String,
    /// Whether this is the default locale
    pub default: bool,
}

/// Describe every supported locale
#[must_use]
pub fn list(site: &Site) -> Vec<LocaleInfo> {
    let locales = site.locales();
    let seo = site.seo();
    locales
        .locales()
        .iter()
        .map(|code| LocaleInfo {
            code: code.clone(),
            native_name: display_name(code, code),
            language: language_name(code, &seo.language_names),
            og_locale: og_locale(code, &seo.og_locales),
            home: locales.path_with_lang(code, "/"),
            default: locales.default_locale() == Some(code.as_str()),
        })
        .collect()
}

/// Run the locales command
pub fn run(globals: &Globals) -> Result<()> {
    let site = globals.load_site()?;
    let infos = list(&site);

    if globals.json {
        return print_json(&infos);
    }
    for info in &infos {
        let marker = if info.default { " (default)" } else { "" };
        let code = if globals.color {
            info.code.bold().to_string()
        } else {
            info.code.clone()
        };
        println!(
            "{:<4} {:<10} {:<8} {:<6}{}",
            code, info.native_name, info.og_locale, info.home, marker
        );
    }
    Ok(())
}
