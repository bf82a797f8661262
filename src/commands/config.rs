// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - get or set one configuration key

use super::Globals;
use crate::config;
use anyhow::{bail, Result};

/// Get or set a dotted configuration key
pub fn run(globals: &Globals, key: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) => {
            tracing::info!("Setting {} = {}", key, v);
            config::set(&globals.config_path, key, v)?;
            println!("{key} = {v}");
        }
        None => match config::get(&globals.config, key)? {
            Some(current) => println!("{current}"),
            None => bail!("Unknown configuration key: {}", key),
        },
    }
    Ok(())
}
