// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Translate command - dictionary lookup with fallbacks

use super::{print_json, resolve_locale, Globals};
use anyhow::Result;
use serde_json::json;

/// Run the translate command
pub fn run(globals: &Globals, key: &str, locale: Option<&str>, fallback: Option<&str>) -> Result<()> {
    let site = globals.load_site()?;
    let locale = resolve_locale(&site, locale);
    let text = site.content().translator().translate(&locale, key, fallback);

    if globals.json {
        print_json(&json!({ "key": key, "locale": locale, "text": text }))
    } else {
        println!("{text}");
        Ok(())
    }
}
