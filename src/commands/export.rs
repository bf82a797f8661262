// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - writes static head metadata for every page and locale

use super::Globals;
use crate::error::FolioError;
use crate::flag::{FlagGrid, FlagOptions};
use crate::seo::head::{escape, render_document};
use crate::seo::{self, PageContext};
use crate::site::Site;
use crate::types::Project;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// `index.html` documents with the full head
    #[default]
    Html,
    /// `meta.json` files holding the page metadata
    Json,
}

impl ExportFormat {
    /// File written for each page
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::Json => "meta.json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(FolioError::UnknownFormat(s.to_string())),
        }
    }
}

/// Directory a localized page path maps to under `root`
fn page_dir(root: &Path, localized: &str) -> PathBuf {
    localized
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"projects\">\n");
    for project in projects {
        let href = project
            .homepage
            .as_deref()
            .or(project.repo.as_deref())
            .unwrap_or("#");
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(href),
            escape(&project.title)
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Write every page in every locale, `robots.txt` and `flag.html` under
/// `output`. Returns the files written.
pub fn export(site: &Site, flag: &FlagOptions, output: &Path, format: ExportFormat) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let locales = site.locales();

    for original in site.pages() {
        let original = locales.strip_lang_from_path(&original);
        for locale in locales.locales() {
            let page = PageContext::localized(locales, locale, &original);
            // Projects are listed on the home page only
            let projects = if original == "/" {
                site.content().projects(locale)
            } else {
                &[]
            };
            let meta = seo::build(site, &page, projects);

            let path = page_dir(output, &page.path).join(format.file_name());
            let content = match format {
                ExportFormat::Html => {
                    let body = format!("<main>\n{}</main>\n", project_list(projects));
                    render_document(&meta, &body)
                }
                ExportFormat::Json => serde_json::to_string_pretty(&meta)
                    .context("Failed to serialize page metadata")?,
            };
            write(&path, &content)?;
            written.push(path);
        }
    }

    let robots = output.join("robots.txt");
    write(&robots, &format!("{}\n", site.robots_txt()))?;
    written.push(robots);

    let mut rng = match flag.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = FlagGrid::new(flag.cols, flag.rows, flag.mode, flag.motion, &mut rng)?;
    let flag_path = output.join("flag.html");
    write(&flag_path, &grid.to_html())?;
    written.push(flag_path);

    Ok(written)
}

/// Run the export command
pub fn run(globals: &Globals, output: &Path, format: &str) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    info!("Exporting {:?} to {}", format, output.display());

    let site = globals.load_site()?;
    let written = export(&site, &globals.config.flag, output, format)?;

    if globals.json {
        let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        return super::print_json(&paths);
    }
    for path in &written {
        println!("{}", path.display());
    }
    println!("Wrote {} files to {}", written.len(), output.display());
    Ok(())
}
