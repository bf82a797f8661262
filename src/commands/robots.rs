// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Robots command - prints robots.txt for the site

use super::Globals;
use anyhow::Result;

/// Run the robots command
pub fn run(globals: &Globals) -> Result<()> {
    let site = globals.load_site()?;
    println!("{}", site.robots_txt());
    Ok(())
}
