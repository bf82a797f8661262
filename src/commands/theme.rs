// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Theme command - reads and changes the persisted theme preference

use super::{print_json, Globals};
use crate::theme::{PreferenceStore, ThemeMode};
use anyhow::{bail, Context, Result};
use serde_json::json;

/// Run the theme command
pub fn run(globals: &Globals, action: &str, mode: Option<&str>) -> Result<()> {
    let data_dir = &globals.config.data_dir;
    let mut store = PreferenceStore::open(data_dir)
        .with_context(|| format!("Failed to open preferences in {}", data_dir.display()))?;

    let current = match action {
        "get" => store.theme(),
        "set" => {
            let Some(mode) = mode else {
                bail!("Usage: folio theme set <system|light|dark>");
            };
            let mode: ThemeMode = mode.parse()?;
            store.set_theme(mode)?;
            mode
        }
        "toggle" => store.toggle()?,
        _ => bail!("Unknown theme action: {}. Use get, set or toggle", action),
    };
    tracing::info!("Theme preference: {}", current);

    if globals.json {
        print_json(&json!({ "theme": current }))
    } else {
        println!("{current}");
        Ok(())
    }
}
