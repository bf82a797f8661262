// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! JSON-LD command - prints the structured data document for one page

use super::head::{page_meta, PageArgs};
use super::{print_json, Globals};
use crate::seo::head::json_ld_script;
use anyhow::Result;

/// Run the jsonld command
pub fn run(globals: &Globals, args: &PageArgs) -> Result<()> {
    let site = globals.load_site()?;
    let meta = page_meta(&site, args)?;
    tracing::info!("{} JSON-LD nodes for {}", meta.json_ld.graph.len(), meta.canonical);

    if globals.json {
        print_json(&meta.json_ld)
    } else {
        // Compact and script-safe, ready to paste into a page
        println!("{}", json_ld_script(&meta));
        Ok(())
    }
}
