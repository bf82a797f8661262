// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Folio CLI - SEO metadata and the flag grid for a bilingual portfolio

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use folio::commands::{self, flag::FlagArgs, head::PageArgs, Globals};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "FOLIO_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Data directory override
    #[arg(long, env = "FOLIO_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Site file override
    #[arg(long, env = "FOLIO_SITE_FILE", global = true)]
    site: Option<PathBuf>,

    /// Content directory override
    #[arg(long, env = "FOLIO_CONTENT_DIR", global = true)]
    content: Option<PathBuf>,

    /// Disable colored output (any non-empty `NO_COLOR` counts)
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the <head> markup for a page
    Head {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the JSON-LD document for a page
    Jsonld {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the hreflang alternates of a page
    Alternates {
        /// Page path, with or without a locale prefix
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// List supported locales
    Locales,

    /// Look up a translation key
    Translate {
        /// Dictionary key
        key: String,

        /// Locale (defaults to the site default)
        #[arg(long)]
        locale: Option<String>,

        /// Text to use when no dictionary has the key
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Print robots.txt
    Robots,

    /// Export static metadata for every page and locale
    Export {
        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (html, json)
        #[arg(short, long, default_value = "html")]
        format: String,
    },

    /// Play the flag grid in the terminal
    Flag {
        #[command(flatten)]
        args: FlagArgs,
    },

    /// Show or change the theme preference
    Theme {
        /// Action: get, set, toggle
        #[arg(default_value = "get")]
        action: String,

        /// Mode for `set` (system, light, dark)
        mode: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key
        key: String,

        /// Value to set (omit to get)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(folio::config::default_path);
    let mut config = folio::config::load(&config_path)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(site) = cli.site {
        config.site_file = site;
    }
    if let Some(content) = cli.content {
        config.content_dir = content;
    }

    // Initialize logging; RUST_LOG wins over -v/-q, which win over the config
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let globals = Globals {
        config,
        config_path,
        json: cli.json,
        color: !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Head { page } => commands::head::run(&globals, &page),
        Commands::Jsonld { page } => commands::jsonld::run(&globals, &page),
        Commands::Alternates { path } => commands::alternates::run(&globals, &path),
        Commands::Locales => commands::locales::run(&globals),
        Commands::Translate { key, locale, fallback } => {
            commands::translate::run(&globals, &key, locale.as_deref(), fallback.as_deref())
        }
        Commands::Robots => commands::robots::run(&globals),
        Commands::Export { output, format } => commands::export::run(&globals, &output, &format),
        Commands::Flag { args } => commands::flag::run(&globals, &args),
        Commands::Theme { action, mode } => commands::theme::run(&globals, &action, mode.as_deref()),
        Commands::Config { key, value } => commands::config::run(&globals, &key, value.as_deref()),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
